use folio_config::Config;
use folio_extern_contracts::backend::BackendApiService;
use tracing::{info, warn};

use crate::environment::Environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let environment = Environment::new(&config)?;

    info!("Checking backend api at {}", config.backend.url);
    if let Err(err) = environment.backend.ping().await {
        warn!("Backend api is not reachable: {err:#}");
    }

    let server = environment.rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
