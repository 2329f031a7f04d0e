use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing marker carried by an article label.
///
/// Labels are free text ("Vestido Promo", "Tejido Mayor", ...) but only
/// the embedded keyword affects pricing. Resolution happens once, at
/// category construction, so the cost-rate lookup is a total function
/// over (collector, marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArticleMarker {
    /// Label contains "PROMO"
    Promo,
    /// Label contains "MAYOR" (wholesale)
    Mayor,
    /// Label contains "SOL"
    Sol,
    /// No recognized keyword
    Plain,
}

impl ArticleMarker {
    /// Resolve the marker from a free-text label, case-insensitively.
    ///
    /// A label could contain several keywords at once; the check order
    /// PROMO, MAYOR, SOL is the pricing tie-break and must not change.
    pub fn from_label(label: &str) -> Self {
        let upper = label.to_uppercase();
        if upper.contains("PROMO") {
            ArticleMarker::Promo
        } else if upper.contains("MAYOR") {
            ArticleMarker::Mayor
        } else if upper.contains("SOL") {
            ArticleMarker::Sol
        } else {
            ArticleMarker::Plain
        }
    }
}

/// Merchandise classification: the label as entered plus its resolved
/// pricing marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ArticleCategory {
    label: String,
    marker: ArticleMarker,
}

impl ArticleCategory {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let marker = ArticleMarker::from_label(&label);
        Self { label, marker }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn marker(&self) -> ArticleMarker {
        self.marker
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<String> for ArticleCategory {
    fn from(s: String) -> Self {
        ArticleCategory::new(s)
    }
}

impl From<ArticleCategory> for String {
    fn from(c: ArticleCategory) -> Self {
        c.label
    }
}
