mod config;
mod districts;
mod engine;
mod error;
mod models;
mod observability;
mod seed;
mod state;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::engine::dispatch::{
    manual_assign, resolve_assignment, run_dispatch_engine, submit_request,
};
use crate::engine::matching::find_exact_district_matches;
use crate::engine::pricing::{availability_window, estimated_duration, pricing_breakdown};
use crate::engine::queue::enqueue_request;
use crate::models::assignment::Resolution;
use crate::models::request::{NewRequest, Urgency};
use crate::models::worker::Worker;

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let (app_state, request_rx) = state::AppState::new(
        config.request_queue_size,
        config.event_buffer_size,
        Duration::from_millis(config.search_delay_ms),
    );
    let shared_state = Arc::new(app_state);

    for worker in seed::sample_workers() {
        shared_state.workers.insert(worker.id, worker);
    }
    shared_state.refresh_worker_gauge();
    tracing::info!(workers = shared_state.workers.len(), "worker pool seeded");

    tokio::spawn(run_dispatch_engine(shared_state.clone(), request_rx));

    let mut assignment_events = shared_state.assignment_events_tx.subscribe();
    let customer_id = Uuid::new_v4();

    let electrician_request = submit_request(
        &shared_state,
        NewRequest {
            customer_id,
            customer_name: "Rajesh Kumar".to_string(),
            phone: "+91-9876543210".to_string(),
            district: "Chennai".to_string(),
            address: "14 Anna Salai".to_string(),
            labor_type: "Electrician".to_string(),
            extra_services: vec!["Switch Board Installation".to_string()],
            urgency: Urgency::Urgent,
        },
    );

    let quote = pricing_breakdown(
        &electrician_request.labor_type,
        4.0,
        electrician_request.urgency,
        0.0,
        0.0,
        &electrician_request.extra_services,
    );
    tracing::info!(
        request_id = %electrician_request.id,
        quote = %serde_json::to_string(&quote)
            .map_err(|err| error::AppError::Internal(format!("quote encode failed: {err}")))?,
        duration = %estimated_duration(
            &electrician_request.labor_type,
            &electrician_request.extra_services,
        ),
        window = %availability_window(electrician_request.urgency),
        "request submitted"
    );
    enqueue_request(&shared_state, electrician_request).await?;

    let roofer_request = submit_request(
        &shared_state,
        NewRequest {
            customer_id,
            customer_name: "Priya Sharma".to_string(),
            phone: "+91-9876543211".to_string(),
            district: "Kanyakumari".to_string(),
            address: "3 Beach Road".to_string(),
            labor_type: "Roofer".to_string(),
            extra_services: vec![],
            urgency: Urgency::Normal,
        },
    );
    enqueue_request(&shared_state, roofer_request).await?;

    let assignment = tokio::time::timeout(
        Duration::from_millis(config.search_delay_ms * 2 + 2_000),
        assignment_events.recv(),
    )
    .await
    .map_err(|_| error::AppError::Internal("timed out waiting for assignment".to_string()))?
    .map_err(|err| error::AppError::Internal(format!("assignment event stream closed: {err}")))?;

    tracing::info!(
        worker = %assignment.worker.name,
        earnings = assignment.earnings,
        distance_km = assignment.distance_km,
        "auto-assignment confirmed"
    );

    resolve_assignment(&shared_state, assignment.id, Resolution::Completed)?;

    // Admin flow: a cook in Coimbatore, picked from same-district candidates.
    let cook_request = submit_request(
        &shared_state,
        NewRequest {
            customer_id,
            customer_name: "Arun Krishnan".to_string(),
            phone: "+91-9876543212".to_string(),
            district: "Coimbatore".to_string(),
            address: "22 Race Course Road".to_string(),
            labor_type: "Cook".to_string(),
            extra_services: vec!["Kitchen Cleaning".to_string()],
            urgency: Urgency::Normal,
        },
    );

    let pool: Vec<Worker> = shared_state
        .workers
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    let candidates = find_exact_district_matches(&pool, &cook_request);

    match candidates.first() {
        Some(top) => {
            let manual = manual_assign(&shared_state, cook_request.id, top.id)?;
            tracing::info!(
                worker = %manual.worker.name,
                cost = manual.request.actual_cost,
                "manual assignment confirmed"
            );
            resolve_assignment(&shared_state, manual.id, Resolution::Cancelled)?;
        }
        None => tracing::warn!(
            request_id = %cook_request.id,
            "no same-district candidates for manual assignment"
        ),
    }

    match shared_state.metrics.encode() {
        Ok(report) => tracing::debug!(metrics = %report, "final metrics"),
        Err(err) => tracing::warn!(error = %err, "failed to encode metrics"),
    }

    Ok(())
}
