use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::pool::WorkerPool;
use crate::site::Site;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// An accepted connection waiting for a worker.
pub struct Accepted {
    pub stream: TcpStream,
    pub peer: SocketAddr,
}

/// Owns the listening socket and the worker pool.
///
/// The pool is created once here and only ever receives submissions.
pub struct Server {
    listener: TcpListener,
    pool: WorkerPool<Accepted>,
}

impl Server {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr = cfg.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        Self::from_listener(
            listener,
            Arc::new(Site::from_config(cfg)),
            cfg.workers,
            cfg.io_timeout,
        )
    }

    /// Builds a server around an already bound listener.
    ///
    /// Fails if `workers` is zero.
    pub fn from_listener(
        listener: TcpListener,
        site: Arc<Site>,
        workers: usize,
        io_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let pool = WorkerPool::new(workers, move |accepted: Accepted| {
            serve(accepted, Arc::clone(&site), io_timeout)
        })
        .context("failed to start worker pool")?;

        Ok(Self { listener, pool })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts forever, handing each connection to the pool.
    ///
    /// Only returns if the pool has gone away.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.local_addr()?;
        info!(
            %addr,
            workers = self.pool.size(),
            "Listening"
        );

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    // Typically EMFILE or a connection reset before accept; keep serving.
                    error!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            debug!(%peer, "Accepted connection");

            self.pool
                .submit(Accepted { stream, peer })
                .await
                .context("worker pool closed")?;
        }
    }
}

async fn serve(accepted: Accepted, site: Arc<Site>, io_timeout: Duration) {
    let Accepted { stream, peer } = accepted;
    let span = tracing::info_span!("conn", %peer);

    async move {
        let mut conn = Connection::new(stream, site, io_timeout);
        match conn.run().await {
            Ok(()) => {}
            Err(e) if e.is_malformed() => debug!(error = %e, "Dropped malformed request"),
            Err(e) => warn!(error = %e, "Connection error"),
        }
    }
    .instrument(span)
    .await
}
