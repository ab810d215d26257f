//! Executes fetch requests issued by the view state.
//!
//! Every request runs on its own tokio task and reports back through the
//! event channel as [`TuiEvent::Fetched`]. Starting a request for a slot
//! aborts whatever was still running for that slot; a result that slips
//! through anyway is rejected by its stale token.

use crate::api_client::AstronomyApi;
use crate::events::TuiEvent;
use astroview_core::{FetchOutcome, FetchRequest, Slot};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct FetchRuntime {
    api: Arc<dyn AstronomyApi>,
    sender: mpsc::Sender<TuiEvent>,
    in_flight: HashMap<Slot, JoinHandle<()>>,
}

impl FetchRuntime {
    pub fn new(api: Arc<dyn AstronomyApi>, sender: mpsc::Sender<TuiEvent>) -> Self {
        Self {
            api,
            sender,
            in_flight: HashMap::new(),
        }
    }

    pub fn dispatch(&mut self, request: FetchRequest) {
        let slot = request.slot();
        if let Some(previous) = self.in_flight.remove(&slot) {
            if !previous.is_finished() {
                tracing::debug!(%slot, superseded_by = %request.token(), "aborting in-flight fetch");
                previous.abort();
            }
        }

        tracing::info!(%slot, token = %request.token(), ?request, "fetch issued");
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let outcome = execute(api.as_ref(), request).await;
            if sender
                .send(TuiEvent::Fetched(Box::new(outcome)))
                .await
                .is_err()
            {
                tracing::debug!(token = %request.token(), "event loop gone, dropping fetch result");
            }
        });
        self.in_flight.insert(slot, handle);
    }

    pub fn dispatch_all(&mut self, requests: impl IntoIterator<Item = FetchRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    /// Abort everything still running. Used on shutdown.
    pub fn cancel_all(&mut self) {
        for (slot, handle) in self.in_flight.drain() {
            if !handle.is_finished() {
                tracing::debug!(%slot, "cancelling fetch on shutdown");
                handle.abort();
            }
        }
    }
}

impl Drop for FetchRuntime {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Run one request to completion, reducing failures to their display text.
pub async fn execute(api: &dyn AstronomyApi, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::PictureOfDay { token, date } => {
            let result = api.fetch_picture_of_day(date).await;
            if let Err(err) = &result {
                tracing::warn!(%token, %date, error = %err, "picture of the day fetch failed");
            }
            FetchOutcome::PictureOfDay {
                token,
                result: result.map_err(|e| e.to_string()),
            }
        }
        FetchRequest::RoverPhotos { token, sol } => {
            let result = api.fetch_rover_photos(sol).await;
            if let Err(err) = &result {
                tracing::warn!(%token, sol, error = %err, "rover photo fetch failed");
            }
            FetchOutcome::RoverPhotos {
                token,
                result: result.map_err(|e| e.to_string()),
            }
        }
    }
}
