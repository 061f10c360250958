use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::domain::Greeting;
use crate::greeting::GreetingState;
use crate::metrics::Metrics;
use crate::routes::{
    get_default_greeting, get_named_greeting, health_check, metrics_snapshot,
    simple_default_greeting, simple_named_greeting, update_greeting,
};

//the simple endpoints greet with the value the process started with, so we
//capture it once here. newtype so web::Data can tell it apart from any other String
pub struct StartupGreeting(pub String);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    //explicit composition root - every singleton the handlers share is built here
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        //GREETING STATE
        //panic if the configured greeting is empty - the state cell must never hold one
        let initial = Greeting::parse(config.app.greeting.clone())
            .expect("configured greeting must not be empty");
        let greeting_state = GreetingState::new(initial);
        let startup_greeting = StartupGreeting(config.app.greeting);

        //METRICS
        let metrics = Metrics::default();

        //RUN
        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, greeting_state, startup_greeting, metrics)?;

        Ok(Self { port, server })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    //an expressively named fn to let other parts of the code know this fn only returns when app is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    greeting_state: GreetingState,
    startup_greeting: StartupGreeting,
    metrics: Metrics,
) -> Result<Server, std::io::Error> {
    //wrap the singletons in web::Data (an Arc under the hood) so every worker shares them
    let greeting_state = web::Data::new(greeting_state);
    let startup_greeting = web::Data::new(startup_greeting);
    let metrics = web::Data::new(metrics);

    let server = HttpServer::new(move || {
        App::new()
            //TRACING
            .wrap(TracingLogger::default()) // this lets us track request_id all the way from request start to end
            //ROUTES
            //the literal /greet/greeting segment is registered before the {name} capture;
            //a GET on it still falls through to get_named_greeting
            .route("/health_check", web::get().to(health_check))
            .route("/greet", web::get().to(get_default_greeting))
            .route("/greet/greeting", web::put().to(update_greeting))
            .route("/greet/{name}", web::get().to(get_named_greeting))
            .route("/simple-greet", web::get().to(simple_default_greeting))
            .route("/simple-greet/{name}", web::get().to(simple_named_greeting))
            .route("/metrics", web::get().to(metrics_snapshot))
            //APP STATE
            .app_data(greeting_state.clone())
            .app_data(startup_greeting.clone())
            .app_data(metrics.clone())
    })
    .listen(listener)?
    .run();
    //no more await!
    Ok(server)
}
