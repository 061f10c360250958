use actix_web::{web, HttpResponse};

use crate::metrics::Metrics;

//read-only snapshot of the process counters for an external collector to scrape
pub async fn metrics_snapshot(metrics: web::Data<Metrics>) -> HttpResponse {
    HttpResponse::Ok().json(metrics.snapshot())
}
