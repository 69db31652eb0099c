use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

/// Both variants listen here. The port is part of the published contract
/// (articles point readers at `curl http://localhost:8080/hello`), so it is
/// a constant rather than configuration.
pub const BIND_ADDR: &str = "0.0.0.0:8080";

/// Binds the listener at [`BIND_ADDR`] and serves `app` until the process
/// is killed.
///
/// Bind failure (port in use, permission denied) is the only error path;
/// it propagates out so the process exits nonzero. There is no retry and
/// no shutdown path.
pub async fn serve(app: Router) -> Result<()> {
    serve_on(BIND_ADDR, app).await
}

async fn serve_on(addr: &str, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
