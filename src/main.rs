//! Command-line entry point for the file server.
//!
//! Usage: `fileserve <port> [config.json]`

use std::env;
use std::process::ExitCode;

use log::error;

use fileserve::server::validate_port;
use fileserve::{FileServer, ServerConfig, ServerError};

const USAGE: &str = "usage: fileserve <port> [config.json]";

fn load_config(args: &[String]) -> Result<ServerConfig, ServerError> {
    let port = args
        .first()
        .ok_or_else(|| ServerError::ConfigError("no port provided".to_string()))?;
    let port = validate_port(port)?;

    let config = match args.get(1) {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };
    Ok(config.with_port(port))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match FileServer::new(config).start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}
