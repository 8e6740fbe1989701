//! `bracketeer serve` - run the HTTP API on a blocking tokio runtime

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bracketeer_core::GeneratorConfig;
use bracketeer_server::{run_server, ServerConfig, ServerState};

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value_t = 8002)]
    pub port: u16,

    /// Front-end files served for any path outside /api
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServerArgs {
    /// A missing static directory only disables the front-end; a file in its
    /// place is an error.
    fn server_config(&self) -> Result<ServerConfig> {
        let static_dir = match &self.static_dir {
            Some(dir) if dir.is_file() => {
                anyhow::bail!("--static-dir points at a file: {}", dir.display())
            }
            Some(dir) => {
                if !dir.exists() {
                    tracing::warn!("No static directory at {}; serving the API only", dir.display());
                }
                Some(dir.to_string_lossy().into_owned())
            }
            None => None,
        };

        Ok(ServerConfig {
            port: self.port,
            static_dir,
        })
    }
}

/// Validate settings up front, then block on the server until it exits
pub fn run(args: ServerArgs, generator: GeneratorConfig) -> Result<()> {
    let config = args.server_config()?;
    let state = ServerState::new(generator)?;

    tokio::runtime::Runtime::new()?.block_on(run_server(config, state))
}
