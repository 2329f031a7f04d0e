//! Sale calculation endpoints
//!
//! One evaluation per request: the form posts the entered values, the
//! response carries the full breakdown. Nothing is stored.

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::sales::models::{ArticleCategory, Collector, SaleInput, SaleRecord};
use crate::modules::sales::services::SaleCalculator;

/// Request body for sale calculation and export
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRequest {
    /// Customer name (pass-through, display only)
    #[serde(default)]
    pub customer_name: String,
    /// Customer province (pass-through, display only)
    #[serde(default)]
    pub province: String,
    /// Gross invoice amount including tax
    pub invoice_total: Decimal,
    /// Financing amount subtracted before cost computation
    #[serde(default)]
    pub financing_deduction: Decimal,
    /// Who collects the payment; unknown names fall back to the
    /// default cost bracket
    pub collector: Collector,
    /// Whether a formal invoice was issued
    #[serde(default = "default_invoiced")]
    pub invoiced: bool,
    /// Article label; the pricing keyword is resolved from it
    pub article_category: ArticleCategory,
    /// Secondary financing, recorded in the export but never subtracted
    #[serde(default)]
    pub secondary_financing: Decimal,
    /// Calculation date (YYYY-MM-DD); stamped with today when absent
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
}

fn default_invoiced() -> bool {
    true
}

/// Response structure for a sale breakdown
/// Decimals are serialized as strings for JSON precision
#[derive(Debug, Serialize)]
pub struct SaleBreakdownResponse {
    pub customer_name: String,
    pub province: String,
    pub sale_date: String, // Format: YYYY-MM-DD
    pub collector: String,
    pub article_category: String,
    pub invoiced: bool,
    pub invoice_total: String,
    pub financing_deduction: String,
    pub net_amount: String,
    pub tax_amount: String,
    pub withholding: String,
    pub commission: String,
    pub cost_rate: String,
    pub cost_amount: String,
    pub net_profit: String,
    pub secondary_financing: String,
}

impl From<SaleRecord> for SaleBreakdownResponse {
    fn from(record: SaleRecord) -> Self {
        Self {
            customer_name: record.customer_name,
            province: record.province,
            sale_date: record.sale_date.format("%Y-%m-%d").to_string(),
            collector: record.input.collector.to_string(),
            article_category: record.input.article_category.to_string(),
            invoiced: record.invoiced,
            invoice_total: record.input.invoice_total.to_string(),
            financing_deduction: record.input.financing_deduction.to_string(),
            net_amount: record.result.net_amount.to_string(),
            tax_amount: record.result.tax_amount.to_string(),
            withholding: record.result.withholding.to_string(),
            commission: record.result.commission.to_string(),
            cost_rate: record.result.cost_rate.to_string(),
            cost_amount: record.result.cost_amount.to_string(),
            net_profit: record.result.net_profit.to_string(),
            secondary_financing: record.secondary_financing.to_string(),
        }
    }
}

/// Build the full sale record from a request: validate the input,
/// run the calculator, attach the pass-through metadata.
pub fn build_record(request: SaleRequest) -> Result<SaleRecord> {
    let input = SaleInput::new(
        request.invoice_total,
        request.financing_deduction,
        request.collector,
        request.article_category,
    )?;

    let calculator = SaleCalculator::new();
    let result = calculator.evaluate(&input).ok_or_else(|| {
        AppError::no_input("invoice_total is zero; enter the invoice total to calculate")
    })?;

    // The calculator never reads the clock; today is stamped here, at
    // the boundary, only when the caller did not supply a date.
    let sale_date = request
        .sale_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    Ok(SaleRecord {
        customer_name: request.customer_name,
        province: request.province,
        invoiced: request.invoiced,
        sale_date,
        secondary_financing: request.secondary_financing,
        input,
        result,
    })
}

/// POST /sales/calculate
///
/// Evaluates one sale and returns the full breakdown. A zero invoice
/// total yields 400 NO_INPUT so the form can prompt for input instead
/// of rendering an all-zero result.
pub async fn calculate_sale(request: web::Json<SaleRequest>) -> Result<HttpResponse> {
    let record = build_record(request.into_inner())?;

    tracing::info!(
        collector = %record.input.collector,
        article = %record.input.article_category,
        cost_rate = %record.result.cost_rate,
        "Sale evaluated"
    );

    Ok(HttpResponse::Ok().json(SaleBreakdownResponse::from(record)))
}

/// Configure sale routes
///
/// Registered as a plain route, not a `/sales` scope: the export module
/// registers under the same prefix, and a scope would capture every
/// `/sales/*` request before later registrations get a look.
pub fn configure_sale_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sales/calculate", web::post().to(calculate_sale));
}
