use catalog_cache::api::api::api_service;
use catalog_cache::api::structs::api_service_data::ApiServiceData;
use catalog_cache::cache::structs::cache_client::CacheClient;
use catalog_cache::catalog::structs::catalog::Catalog;
use catalog_cache::common::common::setup_logging;
use catalog_cache::config::structs::configuration::Configuration;
use catalog_cache::database::structs::database_connector::DatabaseConnector;
use catalog_cache::structs::Cli;
use clap::Parser;
use log::{error, info, warn};
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;

const STATS_INTERVAL: Duration = Duration::from_secs(60);

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().map_err(|e| std::io::Error::other(format!("{:?}", e)))?;

            let database = match DatabaseConnector::new(&config.database, args.create_database).await {
                Ok(database) => Arc::new(database),
                Err(error) => {
                    error!("[BOOT] Unable to open the {} record store: {}", config.database.engine, error);
                    exit(1);
                }
            };
            info!("[BOOT] Record store ready ({})", database.engine());

            let cache = if config.cache.enabled {
                match CacheClient::new(&config.cache, &config.circuit_breaker).await {
                    Ok(client) => {
                        info!("[BOOT] Cache connected ({} on {})", config.cache.engine, config.cache.address);
                        Some(Arc::new(client))
                    }
                    Err(error) => {
                        warn!("[BOOT] Cache unreachable, serving from the record store only: {}", error);
                        None
                    }
                }
            } else {
                info!("[BOOT] Cache disabled, serving from the record store only");
                None
            };

            let health_probe = cache.as_ref().map(|client| {
                client.spawn_health_probe(Duration::from_secs(config.cache.health_interval_secs.max(1)))
            });

            let catalog = Arc::new(Catalog::new(
                database.clone(),
                cache.clone(),
                config.cache_ttl.clone(),
                config.catalog.clone(),
            ));

            let mut api_handle = None;
            if config.api_server.enabled {
                let address: SocketAddr = match config.api_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[API] Invalid bind address {}: {}", config.api_server.bind_address, error);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    catalog: catalog.clone(),
                    config: config.clone(),
                });
                let (handle, server) = match api_service(address, data, &config.api_server) {
                    Ok(service) => service,
                    Err(error) => {
                        error!("[API] Unable to bind {}: {}", address, error);
                        exit(1);
                    }
                };
                tokio::spawn(async move {
                    if let Err(error) = server.await {
                        error!("[API] Server stopped with an error: {}", error);
                    }
                });
                api_handle = Some(handle);
            }

            let stats_handler = tokio_shutdown.clone();
            let stats_catalog = catalog.clone();
            info!("[BOOT] Starting thread for console updates with {} seconds delay...", STATS_INTERVAL.as_secs());
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(STATS_INTERVAL);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = stats_catalog.get_stats();
                            info!(
                                "[STATS] Hits: {} - Misses: {} - Negative: {} - Errors: {} - Bypassed: {} | Store: {} - Failures: {} | Invalidations: {} - Failed: {} - Retries: {} - Pending: {}",
                                stats.cache_hits, stats.cache_misses, stats.negative_hits, stats.cache_errors, stats.bypassed_reads,
                                stats.store_queries, stats.store_errors,
                                stats.invalidations, stats.invalidation_failures, stats.invalidation_retries,
                                stats_catalog.pending_invalidations().len()
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = api_handle {
                info!("[API] Stopping server...");
                handle.stop(true).await;
            }
            if let Some(client) = &cache {
                client.shutdown().await;
            }
            if let Some(probe) = health_probe {
                let _ = probe.await;
            }
            database.close().await;
            info!("Server shutting down completed");
            Ok(())
        })
}
