//! onchain-social profile page.
//!
//! Run against a local replica:
//!   DFX_NETWORK=local cargo run -p onchain-social-frontend
//!
//! Prints the loading placeholder, then the profile once the backend
//! answers. A failed fetch is logged and the placeholder stays up until
//! Ctrl-C.

use clap::Parser;
use onchain_social_client::{ClientConfig, DEFAULT_BACKEND_CANISTER, DEFAULT_HOST};
use onchain_social_core::{CanisterId, Interface, NetworkMode};
use onchain_social_frontend::{AppContext, render};
use tracing_subscriber::EnvFilter;

/// Show the current user's onchain-social profile
#[derive(Parser, Debug)]
#[command(name = "onchain-social")]
struct Args {
    /// Replica host URL
    #[arg(long, env = "ONCHAIN_SOCIAL_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Network the backend runs on; only `local` fetches the root key
    #[arg(long, env = "DFX_NETWORK")]
    network: Option<NetworkMode>,

    /// Backend canister id
    #[arg(long, env = "CANISTER_ID_ONCHAIN_SOCIAL_BACKEND", default_value = DEFAULT_BACKEND_CANISTER)]
    canister_id: CanisterId,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("onchain_social=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ClientConfig {
        host: args.host,
        network: args.network.unwrap_or_default(),
        canister_id: args.canister_id,
        interface: Interface::social_backend(),
    };

    let ctx = AppContext::initialize(&config).await?;
    let view = ctx.profile_view();

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    render::present(&view, &mut std::io::stdout(), shutdown).await?;

    Ok(())
}
