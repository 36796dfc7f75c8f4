mod config;
mod files;
mod http;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = Config::load()?;

    // Optional single argument overrides the configured port,
    // matching the `lantern [ port ]` invocation syntax.
    if let Some(arg) = std::env::args().nth(1) {
        let port: u16 = arg
            .parse()
            .map_err(|_| anyhow::anyhow!("bad port number {arg}"))?;
        cfg.server.set_port(port);
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
