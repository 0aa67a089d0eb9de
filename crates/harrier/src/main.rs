//! Harrier - web dashboard for SLURM clusters.

use clap::Parser;
use harrier_cli::Args;
use harrier_server::AppState;
use harrier_slurm::{Settings, SlurmClient};
use miette::{IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    let settings = Settings::load(&args.settings).into_diagnostic()?;
    let client = SlurmClient::new(&settings);
    info!("scheduler base command: {}", client.base_cmd());

    let root_path = args.root_path();
    let app = harrier_server::build_router(AppState::new(client, root_path.clone()));

    let listener = tokio::net::TcpListener::bind(args.bind_addr())
        .await
        .into_diagnostic()?;
    info!(
        "listening on {} (root path {:?})",
        listener.local_addr().into_diagnostic()?,
        root_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .into_diagnostic()?;

    Ok(())
}
