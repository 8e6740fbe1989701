//! Example to run the Bracketeer server standalone
//!
//! Run with: cargo run -p bracketeer-server --example run_server

use bracketeer_core::GeneratorConfig;
use bracketeer_server::{run_server, ServerConfig, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 8002,
        static_dir: None,
    };
    let state = ServerState::new(GeneratorConfig::default())?;

    println!("Starting Bracketeer server on port {}", config.port);
    println!("Try: curl -X POST localhost:{}/api/knockout -H 'content-type: application/json' -d '{{\"teams\":[\"A\",\"B\",\"C\"]}}'", config.port);

    run_server(config, state).await
}
