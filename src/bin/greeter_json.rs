use http_greeters::{app, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("greeter-json starting");

    server::serve(app::json_app()).await
}
