//! src/startup.rs

use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use std::time::{Duration, Instant};
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::{api_info, create_user, get_user_by_id, health_check, list_users};

/// Instant the application was built; the health endpoint reports uptime
/// relative to it.
pub struct StartTime(pub Instant);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Runs until the server stops, which includes graceful shutdown on
    /// SIGTERM/SIGINT (in-flight requests are drained before exit).
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

pub fn run(listener: TcpListener, db_pool: PgPool) -> Result<Server, std::io::Error> {
    // Wrap the database pool in a smart pointer
    let db_pool = Data::new(db_pool);
    let start_time = Data::new(StartTime(Instant::now()));
    // Capture `db_pool` from the surrounding environment
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(api_info))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/users")
                    .route("", web::post().to(create_user))
                    .route("", web::get().to(list_users))
                    .route("/{user_id}", web::get().to(get_user_by_id)),
            )
            .app_data(db_pool.clone())
            .app_data(start_time.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
