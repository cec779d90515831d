use actix_web::{middleware::Logger, App, HttpServer};
use std::io;

mod config;
mod static_files;

use config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let root = config.static_files_path.clone();
    if !static_files::index_path(&root).is_file() {
        log::warn!("No {} found in {}, client routes will 404", static_files::INDEX_FILE, root);
    }

    log::info!("Serving {} at http://{}:{}", root, config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(static_files::spa_service(&root))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
