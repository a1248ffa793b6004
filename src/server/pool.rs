//! Fixed-size worker pool.
//!
//! `size` long-lived tasks pull jobs off one bounded channel. The channel
//! holds at most `size` pending jobs, so once every worker is busy and the
//! queue is full, [`WorkerPool::submit`] waits instead of letting the backlog
//! grow without bound.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("worker pool needs at least one worker")]
    NoWorkers,

    #[error("worker pool has shut down")]
    Closed,
}

pub struct WorkerPool<T> {
    sender: mpsc::Sender<T>,
    workers: Vec<JoinHandle<()>>,
}

impl<T> WorkerPool<T>
where
    T: Send + 'static,
{
    /// Spawns `size` workers, each running `handler` on one job at a time.
    ///
    /// Every job runs in its own task which the worker awaits, so a panic in
    /// `handler` is logged and the worker carries on with the next job.
    /// A `size` of zero is rejected with [`PoolError::NoWorkers`].
    pub fn new<F, Fut>(size: usize, handler: F) -> Result<Self, PoolError>
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if size == 0 {
            return Err(PoolError::NoWorkers);
        }

        let (sender, receiver) = mpsc::channel(size);
        let receiver = Arc::new(Mutex::new(receiver));
        let handler = Arc::new(handler);

        let workers = (0..size)
            .map(|id| {
                let receiver = Arc::clone(&receiver);
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    loop {
                        // Lock is released as soon as a job is taken.
                        let job = receiver.lock().await.recv().await;
                        let Some(job) = job else { break };

                        if let Err(e) = tokio::spawn((*handler)(job)).await {
                            tracing::error!(worker = id, error = %e, "Job panicked");
                        }
                    }
                    tracing::debug!(worker = id, "Worker stopped");
                })
            })
            .collect();

        Ok(Self { sender, workers })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Hands a job to the pool, waiting while the queue is full.
    pub async fn submit(&self, job: T) -> Result<(), PoolError> {
        self.sender.send(job).await.map_err(|_| PoolError::Closed)
    }

    /// Stops accepting jobs and waits for the queued ones to finish.
    pub async fn join(self) {
        drop(self.sender);
        for (id, worker) in self.workers.into_iter().enumerate() {
            if let Err(e) = worker.await {
                tracing::error!(worker = id, error = %e, "Worker failed");
            }
        }
    }
}
