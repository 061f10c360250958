use std::time::Instant;

use actix_web::{web, HttpResponse};

use crate::greeting::render;
use crate::metrics::Metrics;
use crate::routes::Message;
use crate::startup::StartupGreeting;

//the simple pair answers from the greeting captured at startup - a PUT on
// /greet/greeting never shows up here

#[tracing::instrument(name = "Getting the simple default greeting", skip(startup_greeting))]
pub async fn simple_default_greeting(
    startup_greeting: web::Data<StartupGreeting>,
) -> HttpResponse {
    let message = render(&startup_greeting.0, "World");
    HttpResponse::Ok().json(Message { message })
}

#[tracing::instrument(
    name = "Getting the simple named greeting",
    skip(name, metrics),
    fields(who = %name)
)]
pub async fn simple_named_greeting(
    name: web::Path<String>,
    metrics: web::Data<Metrics>,
) -> HttpResponse {
    let started = Instant::now();
    metrics.inc_personalized_gets();

    //fixed prefix, no exclamation mark - this path greets differently from the /greet pair on purpose
    let message = format!("Hello {}", name);
    let response = HttpResponse::Ok().json(Message { message });

    metrics.record_get(started.elapsed());
    response
}
