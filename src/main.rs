use warden::config::Config;
use warden::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(
        public_dir = %cfg.public_dir.display(),
        allowed = cfg.allowed_paths.len(),
        template = cfg.template_path.as_deref().unwrap_or("-"),
        "Configuration loaded"
    );

    let server = Server::bind(&cfg).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
