use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};
use std::sync::Arc;

use anihour::config::AppConfig;
use anihour::modules::cache::{CacheStore, FileCacheStore, MemoryCacheStore};
use anihour::modules::provider::{FetchCoordinator, JikanTransport};
use anihour::server;
use anihour::shared::utils::init_logger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;

    let cache: Arc<dyn CacheStore> = match &config.cache_dir {
        Some(dir) => {
            info!("caching responses under {}", dir.display());
            Arc::new(FileCacheStore::new(dir))
        }
        None => {
            warn!("no usable cache directory, responses will not survive restarts");
            Arc::new(MemoryCacheStore::new())
        }
    };

    let transport = Arc::new(JikanTransport::new()?);
    let coordinator = web::Data::new(FetchCoordinator::new(
        transport,
        cache,
        config.upstream_url.clone(),
        config.cache_ttl_secs,
    ));

    info!("serving on {}:{}", config.bind, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(coordinator.clone())
            .configure(server::configure)
    })
    .bind((config.bind.clone(), config.port))?
    .run()
    .await?;

    Ok(())
}
