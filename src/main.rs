//! Gatepass: bearer-token identity service.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod password;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;
pub mod users;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("GATEPASS_DB").unwrap_or_else(|_| "gatepass.db".into());
    let state = state::build_state(&db_path)?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());

    console::print_banner();
    console::print_startup(&addr);
    tracing::info!("starting gatepass on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
