// Cost/commission/tax derivation for one sale.
//
// The rate constants below were lifted from the operation's pricing
// spreadsheet and are load-bearing: the commission coefficient in
// particular was reverse-engineered from historical rows
// (43269.96 / 597000 = 0.072479) and must not be "tidied up".

use rust_decimal::Decimal;

use crate::modules::sales::models::{ArticleMarker, Collector, SaleInput, SaleResult};

/// Proportional tax divisor: totals are gross of 21% IVA
fn vat_divisor() -> Decimal {
    Decimal::new(121, 2)
}

/// IIBB withholding rate, applied to the net amount
fn withholding_rate() -> Decimal {
    Decimal::new(35, 3)
}

/// Collector commission coefficient, applied to the gross total
fn commission_rate() -> Decimal {
    Decimal::new(72479, 6)
}

/// SaleCalculator derives all figures for a single sale.
///
/// Pure and stateless: identical inputs always produce identical
/// results, and separate evaluations share nothing.
pub struct SaleCalculator;

impl SaleCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Cost fraction for a (collector, marker) pair.
    ///
    /// A closed decision table: Charlie carries the high brackets, the
    /// Rita/Tomi/Mery group shares a lower one, and everything else —
    /// including unknown collectors — lands on the 20% default. The
    /// fallback is deliberate, not an error path.
    pub fn compute_cost_rate(&self, collector: &Collector, marker: ArticleMarker) -> Decimal {
        match (collector, marker) {
            (Collector::Charlie, ArticleMarker::Promo) => Decimal::new(46, 2),
            (Collector::Charlie, ArticleMarker::Mayor) => Decimal::new(60, 2),
            // Charlie has no SOL bracket; it prices like a plain article
            (Collector::Charlie, _) => Decimal::new(40, 2),

            (
                Collector::Rita | Collector::Tomi | Collector::Mery,
                ArticleMarker::Promo,
            ) => Decimal::new(41, 2),
            (
                Collector::Rita | Collector::Tomi | Collector::Mery,
                ArticleMarker::Mayor,
            ) => Decimal::new(35, 2),
            (
                Collector::Rita | Collector::Tomi | Collector::Mery,
                ArticleMarker::Sol,
            ) => Decimal::new(30, 2),
            (
                Collector::Rita | Collector::Tomi | Collector::Mery,
                ArticleMarker::Plain,
            ) => Decimal::new(20, 2),

            (Collector::Other(_), _) => Decimal::new(20, 2),
        }
    }

    /// Derive the full breakdown for one sale.
    ///
    /// Returns `None` when the invoice total is zero: that means "not
    /// yet entered", and callers are expected to prompt for input
    /// rather than show a degenerate all-zero breakdown.
    ///
    /// No rounding happens here; amounts stay at full precision until
    /// presentation. Negative derived figures (financing plus
    /// commission exceeding the total) pass through as valid, if
    /// commercially unusual, outputs.
    pub fn evaluate(&self, input: &SaleInput) -> Option<SaleResult> {
        if input.invoice_total.is_zero() {
            return None;
        }

        let net_amount = input.invoice_total / vat_divisor();
        let tax_amount = input.invoice_total - net_amount;

        let withholding = net_amount * withholding_rate();
        let commission = input.invoice_total * commission_rate();

        let cost_rate =
            self.compute_cost_rate(&input.collector, input.article_category.marker());

        let adjusted_base = input.invoice_total - input.financing_deduction - commission;
        let cost_amount = adjusted_base * cost_rate;
        let net_profit = adjusted_base - cost_amount;

        Some(SaleResult {
            net_amount,
            tax_amount,
            withholding,
            commission,
            cost_rate,
            cost_amount,
            net_profit,
        })
    }
}

impl Default for SaleCalculator {
    fn default() -> Self {
        Self::new()
    }
}
