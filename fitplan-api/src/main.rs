use std::error::Error;

use actix_web::{middleware::Logger, App, HttpServer};
use fitplan_api::{config::ServerConfig, routes};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = ServerConfig::from_env()?;
    info!("Allowed origins: {}", config.allowed_origins);
    info!("Listening on {}:{}", config.host, config.port);

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(app_config.cors())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
