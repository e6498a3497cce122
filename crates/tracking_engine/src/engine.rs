use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracking_logging::{tracking_debug, tracking_error, tracking_trace, tracking_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError, SearchId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Search {
        search_id: SearchId,
        identifier: String,
    },
}

/// Runs lookups on a background tokio runtime.
///
/// Searches run concurrently; their completions are reported in arrival order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("tracking-engine")
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn search(&self, search_id: SearchId, identifier: impl Into<String>) {
        let identifier = identifier.into();
        tracking_trace!("Queueing search {} for {:?}", search_id, identifier);
        let command = EngineCommand::Search {
            search_id,
            identifier,
        };
        if self.cmd_tx.send(command).is_err() {
            tracking_error!("Engine stopped; search {} dropped", search_id);
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search {
            search_id,
            identifier,
        } => {
            let result = fetcher.fetch(&identifier).await;
            match &result {
                Ok(output) => tracking_debug!(
                    "Search {} finished: {} bytes from {}",
                    search_id,
                    output.metadata.byte_len,
                    output.metadata.request_url
                ),
                Err(err) => tracking_warn!("Search {} failed: {}", search_id, err),
            }
            let _ = event_tx.send(EngineEvent::SearchCompleted { search_id, result });
        }
    }
}
