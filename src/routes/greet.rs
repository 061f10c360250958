use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::Greeting;
use crate::greeting::{render, GreetingState};

//every JSON body this service sends has this one shape, error body included
#[derive(serde::Serialize)]
pub struct Message {
    pub message: String,
}

#[derive(serde::Deserialize)]
pub struct GreetingUpdate {
    //Option, not String - a body like {} must reach the handler so it can answer with our 400
    pub greeting: Option<String>,
}

#[tracing::instrument(name = "Getting the default greeting", skip(greeting_state))]
pub async fn get_default_greeting(greeting_state: web::Data<GreetingState>) -> HttpResponse {
    let message = render(&greeting_state.get(), "World");
    HttpResponse::Ok().json(Message { message })
}

#[tracing::instrument(
    name = "Getting a named greeting",
    skip(name, greeting_state),
    fields(who = %name)
)]
pub async fn get_named_greeting(
    name: web::Path<String>,
    greeting_state: web::Data<GreetingState>,
) -> HttpResponse {
    //the name goes through verbatim - no validation on reads
    let message = render(&greeting_state.get(), &name);
    HttpResponse::Ok().json(Message { message })
}

#[tracing::instrument(name = "Updating the greeting", skip(body, greeting_state))]
pub async fn update_greeting(
    body: web::Json<GreetingUpdate>,
    greeting_state: web::Data<GreetingState>,
) -> Result<HttpResponse, UpdateGreetingError> {
    let new_greeting = body
        .0
        .greeting
        .ok_or(UpdateGreetingError::MissingGreeting)?;
    //rejects the empty string - nothing has been written to the state yet at this point
    let new_greeting =
        Greeting::parse(new_greeting).map_err(|_| UpdateGreetingError::MissingGreeting)?;

    //atomic replace - every in-flight and future read sees the new value from here on
    greeting_state.set(new_greeting);
    Ok(HttpResponse::NoContent().finish())
}

// -----------------------------------------------------------------------------
// errors

#[derive(thiserror::Error, Debug)]
pub enum UpdateGreetingError {
    #[error("No greeting provided")]
    MissingGreeting,
}

//implement ResponseError to be able to convert it into an actix_web type error and return as part of HttpResponse
impl ResponseError for UpdateGreetingError {
    fn status_code(&self) -> StatusCode {
        match self {
            UpdateGreetingError::MissingGreeting => StatusCode::BAD_REQUEST,
        }
    }
    //the error body keeps the same {"message": ...} shape as the success bodies
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Message {
            message: self.to_string(),
        })
    }
}
