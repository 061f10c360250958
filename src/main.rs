use greet_service::config::get_config;
use greet_service::startup::Application;
use greet_service::telem::{get_subscriber, init_subscriber};

#[actix_web::main] //needed to have an async runtime, because rust by default doesn't provide one
pub async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("greet-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    //panic if no config
    let config = get_config().expect("failed to load config");

    let app = Application::build(config)?;
    app.run_until_stopped().await
}
