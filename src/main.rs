mod model;
mod server;

use std::process::ExitCode;

use crate::server::{
    config::Config,
    database::SeaOrmDatabase,
    lifecycle::{shutdown::ShutdownSignal, signal, ExitStatus, LifecycleController},
    logger,
    router::ResourceRoutes,
    startup,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logger::init(logger::LogFormat::from_env());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitStatus::Failure.into();
        }
    };

    let shutdown = ShutdownSignal::new();
    if let Err(e) = signal::install(shutdown.clone()) {
        tracing::error!("{}", e);
        return ExitStatus::Failure.into();
    }

    let database = SeaOrmDatabase::from_config(&config);
    let controller = LifecycleController::new(database, config.bind_addr(), config.shutdown_timeout);

    controller
        .run(
            |db| startup::app(db, ResourceRoutes::default()),
            shutdown,
        )
        .await
        .into()
}
