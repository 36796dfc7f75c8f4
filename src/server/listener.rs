use crate::config::Config;
use crate::http::connection::Connection;
use tokio::net::TcpListener;
use tracing::info;

/// Accept loop: binds the listening socket and dispatches one task per
/// connection. The loop itself never awaits a connection's handling, so
/// a slow client cannot stall acceptance; finished tasks are reclaimed
/// by the runtime as they complete.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let files = cfg.files.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, files);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
