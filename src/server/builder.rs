//! The run_server entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting Text Processing API");

    let server = HttpServer::new(&config);
    info!(
        "Server starting at: http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API Endpoints:");
    info!("   GET  /              - API information");
    info!("   GET  /health        - Health check");
    info!("   POST /process-text  - Process single text");
    info!("   POST /process-json  - Process JSON data");
    info!("   POST /upload-json   - Upload JSON file");

    server.start().await
}
