//! CSV rendering for a single sale record.
//!
//! The column set and order mirror the operation's spreadsheet, one
//! header line plus one data row per export. Amounts are written at
//! full precision; the cost rate is written as a fraction (0.2, not
//! 20%). Spreadsheet-bound, so the headers stay in Spanish.

use crate::modules::sales::models::SaleRecord;

const HEADERS: [&str; 16] = [
    "Fecha",
    "Nombre",
    "Provincia",
    "Neto",
    "IVA",
    "Total Fac",
    "Financiacion",
    "IIBB",
    "Comision",
    "Pago",
    "Factura",
    "Articulo",
    "Costo %",
    "Costo $",
    "Bolsillo",
    "Financ 2",
];

/// Renders one sale record as a downloadable CSV document
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the header line plus the single data row
    pub fn render(&self, record: &SaleRecord) -> String {
        let fields = [
            format!(
                "{}/{}",
                record.sale_date.format("%-d"),
                record.sale_date.format("%-m")
            ),
            record.customer_name.clone(),
            record.province.clone(),
            record.result.net_amount.to_string(),
            record.result.tax_amount.to_string(),
            record.input.invoice_total.to_string(),
            record.input.financing_deduction.to_string(),
            record.result.withholding.to_string(),
            record.result.commission.to_string(),
            record.input.collector.to_string(),
            if record.invoiced { "Si" } else { "No" }.to_string(),
            record.input.article_category.to_string(),
            record.result.cost_rate.to_string(),
            record.result.cost_amount.to_string(),
            record.result.net_profit.to_string(),
            record.secondary_financing.to_string(),
        ];

        let header_line = HEADERS.join(",");
        let data_line = fields
            .iter()
            .map(|f| escape_field(f))
            .collect::<Vec<_>>()
            .join(",");

        format!("{}\n{}\n", header_line, data_line)
    }

    /// Download filename: Venta_{name}_{day}-{month}.csv
    pub fn filename(&self, record: &SaleRecord) -> String {
        format!(
            "Venta_{}_{}-{}.csv",
            sanitize_for_filename(&record.customer_name),
            record.sale_date.format("%-d"),
            record.sale_date.format("%-m"),
        )
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a field per RFC 4180 when it contains a comma, quote or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Keep filenames header-safe: anything outside alphanumerics, dash and
/// underscore becomes an underscore
fn sanitize_for_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
