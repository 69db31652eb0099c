use http_greeters::{app, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // The talk slides show this exact line, so it goes to stdout directly
    // rather than through the tracing subscriber.
    println!("Starting server on port 8080");

    server::serve(app::plain_app()).await
}
