use actix_web::{http::header, web, HttpResponse};

use crate::core::Result;
use crate::modules::exports::services::CsvExporter;
use crate::modules::sales::controllers::sale_controller::{build_record, SaleRequest};

/// POST /sales/export
///
/// Evaluates one sale and responds with a single-row CSV attachment,
/// ready to append to the operation's spreadsheet. Same request body
/// and validation as /sales/calculate.
pub async fn export_sale(request: web::Json<SaleRequest>) -> Result<HttpResponse> {
    let record = build_record(request.into_inner())?;

    let exporter = CsvExporter::new();
    let filename = exporter.filename(&record);
    let body = exporter.render(&record);

    tracing::info!(
        filename = %filename,
        customer = %record.customer_name,
        "Sale exported"
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body))
}

/// Configure export routes
///
/// Plain route under the shared `/sales` prefix; see
/// `configure_sale_routes` for why no scope is used here.
pub fn configure_export_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sales/export", web::post().to(export_sale));
}
