//! Fragment server entry point

use clap::Parser;
use shared::logging;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use fragment_server::config::{DEFAULT_USERS_ENDPOINT, LatencyProfile, ServerConfig};
use fragment_server::{RealMarkupSanitizer, RealUserDirectory, WebServer, WebServerResult};

/// Command line arguments, each also readable from the environment
#[derive(Parser, Debug)]
#[command(name = "fragment-server")]
#[command(about = "Serves HTML fragments for partial-page interaction demos")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Static files directory
    #[arg(long, env = "STATIC_DIR", default_value = "./public")]
    static_dir: PathBuf,

    /// External user listing endpoint
    #[arg(long, env = "USERS_ENDPOINT", default_value = DEFAULT_USERS_ENDPOINT)]
    users_endpoint: String,

    /// Artificial latency of /convert in milliseconds
    #[arg(long, default_value_t = 2000)]
    conversion_delay_ms: u64,

    /// Artificial latency of /search and /search/api in milliseconds
    #[arg(long, default_value_t = 1000)]
    search_delay_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> WebServerResult<ServerConfig> {
        let mut config = ServerConfig::default()
            .with_users_endpoint(&self.users_endpoint)?
            .with_static_dir(self.static_dir)
            .with_latency(LatencyProfile {
                conversion: Duration::from_millis(self.conversion_delay_ms),
                search: Duration::from_millis(self.search_delay_ms),
            });
        config.host = self.host;
        config.port = self.port;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            logging::log_error("Configuration", &err);
            return Err(err);
        }
    };

    logging::log_startup(&format!("fragment server on {}", config.bind_address()));

    let user_directory = RealUserDirectory::new(config.users_endpoint.clone());
    let sanitizer = RealMarkupSanitizer::new();

    let webserver = WebServer::new(config, user_directory, sanitizer);

    if let Err(err) = webserver.run().await {
        logging::log_error("Fragment server", &err);
        return Err(err);
    }

    logging::log_success("Fragment server stopped gracefully");
    Ok(())
}
