use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{broadcast, mpsc};
use uuid::Uuid;

use crate::models::assignment::Assignment;
use crate::models::request::ServiceRequest;
use crate::models::worker::Worker;
use crate::observability::metrics::Metrics;

/// Shared pools owned by the lifecycle layer. All mutation of worker
/// availability goes through the dispatch operations, which decide and
/// write under the pool entry's guard.
pub struct AppState {
    pub workers: DashMap<Uuid, Worker>,
    pub requests: DashMap<Uuid, ServiceRequest>,
    pub assignments: DashMap<Uuid, Assignment>,
    pub request_tx: mpsc::Sender<ServiceRequest>,
    pub assignment_events_tx: broadcast::Sender<Assignment>,
    pub metrics: Metrics,
    /// UX pacing for the "searching" step. Zero in tests; never load-bearing.
    pub search_delay: Duration,
}

impl AppState {
    pub fn new(
        request_queue_size: usize,
        event_buffer_size: usize,
        search_delay: Duration,
    ) -> (Self, mpsc::Receiver<ServiceRequest>) {
        let (request_tx, request_rx) = mpsc::channel(request_queue_size);
        let (assignment_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        (
            Self {
                workers: DashMap::new(),
                requests: DashMap::new(),
                assignments: DashMap::new(),
                request_tx,
                assignment_events_tx,
                metrics: Metrics::new(),
                search_delay,
            },
            request_rx,
        )
    }

    pub fn refresh_worker_gauge(&self) {
        let available = self
            .workers
            .iter()
            .filter(|entry| entry.value().available)
            .count();
        self.metrics.workers_available.set(available as i64);
    }
}
