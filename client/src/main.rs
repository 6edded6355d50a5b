use crate::cfg::Config;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use timeclock::{RouteGuard, SessionResolver, TokenStore};
use tracing::{info, Level};

//--------------------------------------------------------------------------------------------------

mod cfg;
mod gateway;
mod login;
mod shell;

//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg: Config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::File::with_name("config.local").required(false))
        .add_source(config::Environment::with_prefix("TIMECLOCK").separator("__"))
        .build()?
        .try_deserialize()?;

    // Initialize tracing
    let mut fmt_sub = tracing_subscriber::fmt();
    if cfg.debug {
        fmt_sub = fmt_sub.with_max_level(Level::DEBUG);
    } else {
        fmt_sub = fmt_sub.with_max_level(Level::INFO);
    }
    fmt_sub.init();

    // Wire up the session core
    let store = Arc::new(TokenStore::new(Path::new(&cfg.data_dir)));
    let resolver = SessionResolver::new(store.clone());
    let gateway = gateway::ApiGateway::new(&cfg, store.clone());
    let guard = RouteGuard::standard();

    // A remembered session picks up where it left off; anything stale purges itself here
    match resolver.current_user() {
        Some(user) => info!("Restored session for employee {}", user.employee_id()),
        None => info!("No stored session - sign-in required"),
    }

    shell::Shell::new(store, resolver, gateway, guard).run().await
}

//--------------------------------------------------------------------------------------------------
