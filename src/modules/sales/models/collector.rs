use serde::{Deserialize, Serialize};
use std::fmt;

/// Party who receives and processes the customer's payment.
///
/// The set of known collectors is closed; anything else lands on
/// `Other`, which keeps the raw label for display and maps to the
/// default cost-rate bracket. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Collector {
    Charlie,
    Rita,
    Tomi,
    Mery,
    /// Unknown collector, retained verbatim for reporting
    Other(String),
}

impl Collector {
    /// Parse a collector name. Never fails: unrecognized names become
    /// `Other`, which resolves to the default cost rate downstream.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "CHARLIE" => Collector::Charlie,
            "RITA" => Collector::Rita,
            "TOMI" => Collector::Tomi,
            "MERY" => Collector::Mery,
            _ => Collector::Other(name.trim().to_string()),
        }
    }

    /// True when the collector is one of the named brackets
    pub fn is_known(&self) -> bool {
        !matches!(self, Collector::Other(_))
    }
}

impl fmt::Display for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collector::Charlie => write!(f, "CHARLIE"),
            Collector::Rita => write!(f, "RITA"),
            Collector::Tomi => write!(f, "TOMI"),
            Collector::Mery => write!(f, "MERY"),
            Collector::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for Collector {
    fn from(s: String) -> Self {
        Collector::parse(&s)
    }
}

impl From<Collector> for String {
    fn from(c: Collector) -> Self {
        c.to_string()
    }
}
