//! Background execution of user batch fetches.

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};

use crate::api::client::ApiClient;
use crate::ui::events::AppEvent;

/// Runs fetches on a private single-worker runtime so the render loop
/// never blocks on network I/O. Outcomes come back through the app
/// event channel.
pub struct Fetcher {
    runtime: Runtime,
    client: Arc<ApiClient>,
    events: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(client: ApiClient, events: Sender<AppEvent>) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("userscope-fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client: Arc::new(client),
            events,
        })
    }

    /// Start one fetch. A send failure means the receiver is gone and the
    /// app is already shutting down, so it is ignored.
    pub fn spawn_fetch(&self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();

        info!(url = %client.url(), "starting user fetch");
        self.runtime.spawn(async move {
            match client.fetch_users().await {
                Ok(users) => {
                    info!(count = users.len(), "user fetch finished");
                    let _ = events.send(AppEvent::UsersLoaded(users));
                }
                Err(err) => {
                    error!(error = %err, "user fetch failed");
                    let _ = events.send(AppEvent::FetchFailed(err.to_string()));
                }
            }
        });
    }
}
