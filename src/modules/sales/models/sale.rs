// A sale is a single form entry: the operator types the invoice total and
// financing amounts, picks who collects and what was sold, and every other
// figure is derived from those four values. Nothing here persists; each
// record lives for one evaluation and one optional export.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::sales::models::{ArticleCategory, Collector};

/// Financial parameters of one retail sale, as entered by the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleInput {
    /// Gross invoice amount, tax included
    pub invoice_total: Decimal,

    /// Financing amount subtracted before cost computation
    pub financing_deduction: Decimal,

    /// Who collects the payment
    pub collector: Collector,

    /// What was sold
    pub article_category: ArticleCategory,
}

impl SaleInput {
    /// Create a sale input with validation.
    ///
    /// Monetary amounts must be non-negative; the calculator itself does
    /// not re-check this. Collector and category accept any text — the
    /// unknown cases resolve to the default cost bracket downstream.
    pub fn new(
        invoice_total: Decimal,
        financing_deduction: Decimal,
        collector: Collector,
        article_category: ArticleCategory,
    ) -> Result<Self> {
        Self::validate_amount("invoice_total", invoice_total)?;
        Self::validate_amount("financing_deduction", financing_deduction)?;

        Ok(Self {
            invoice_total,
            financing_deduction,
            collector,
            article_category,
        })
    }

    fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} must be non-negative, got: {}",
                field, amount
            )));
        }

        Ok(())
    }
}

/// Derived figures for one sale. Every field is a pure function of the
/// input; amounts are kept at full precision until presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleResult {
    /// Invoice total with the 21% tax backed out
    pub net_amount: Decimal,
    /// IVA: invoice_total minus net_amount
    pub tax_amount: Decimal,
    /// IIBB: regulatory withholding off the net amount, recorded but
    /// not subtracted from profit
    pub withholding: Decimal,
    /// Collector commission off the gross invoice total
    pub commission: Decimal,
    /// Cost fraction from the (collector, marker) table
    pub cost_rate: Decimal,
    /// Monetary cost: adjusted base times cost_rate
    pub cost_amount: Decimal,
    /// "Bolsillo": adjusted base minus cost, the take-home figure
    pub net_profit: Decimal,
}

impl SaleResult {
    /// The base cost and profit are computed against:
    /// invoice_total - financing_deduction - commission
    pub fn adjusted_base(&self) -> Decimal {
        self.net_profit + self.cost_amount
    }
}

/// One complete export row: operator-entered metadata that the
/// calculator never looks at, plus the input and its derived figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Customer name, display only
    pub customer_name: String,
    /// Customer province, display only
    pub province: String,
    /// Whether a formal invoice was issued
    pub invoiced: bool,
    /// Calculation date, supplied by the caller (the calculator never
    /// reads the clock)
    pub sale_date: NaiveDate,
    /// Secondary financing amount. Record-only: it is written to the
    /// export but never enters the profit formula.
    pub secondary_financing: Decimal,
    pub input: SaleInput,
    pub result: SaleResult,
}
