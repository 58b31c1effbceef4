//! main.rs

use user_service::configuration::{get_configuration, Environment};
use user_service::startup::Application;
use user_service::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("user-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!(
        port = application.port(),
        environment = Environment::detect().as_str(),
        "Server is listening"
    );
    application.run_until_stopped().await?;
    tracing::info!("API has exited");

    Ok(())
}
