use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::districts::district_distance;
use crate::engine::matching::find_best_match;
use crate::engine::pricing::service_cost;
use crate::error::AppError;
use crate::models::assignment::{Assignment, AssignmentStatus, Resolution};
use crate::models::request::{NewRequest, RequestStatus, ServiceRequest};
use crate::models::worker::Worker;
use crate::state::AppState;

/// Rough km per district hop; the proximity model has no coordinates.
const KM_PER_HOP: f64 = 25.0;
/// Rough travel minutes per district hop.
const MINUTES_PER_HOP: u32 = 30;
/// Worker's share of the actual cost; the platform keeps the rest.
const WORKER_SHARE: f64 = 0.8;
/// Quotes at assignment time assume the standard visit length.
const DEFAULT_DURATION_HOURS: f64 = 4.0;

#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    Assigned(Assignment),
    /// No eligible worker. Not an error: the request stays pending for a
    /// later manual retry by the admin.
    NoSupply,
}

pub fn submit_request(state: &AppState, data: NewRequest) -> ServiceRequest {
    let request = ServiceRequest {
        id: Uuid::new_v4(),
        customer_id: data.customer_id,
        customer_name: data.customer_name,
        phone: data.phone,
        district: data.district,
        address: data.address,
        labor_type: data.labor_type,
        extra_services: data.extra_services,
        urgency: data.urgency,
        status: RequestStatus::Pending,
        assigned_worker: None,
        actual_cost: None,
        created_at: Utc::now(),
    };

    state.requests.insert(request.id, request.clone());
    request
}

pub async fn run_dispatch_engine(state: Arc<AppState>, mut request_rx: mpsc::Receiver<ServiceRequest>) {
    info!("dispatch engine started");

    while let Some(request) = request_rx.recv().await {
        state.metrics.requests_in_queue.dec();

        // Pacing for the "searching for workers" indicator. Skippable;
        // no invariant depends on it.
        if !state.search_delay.is_zero() {
            sleep(state.search_delay).await;
        }

        let start = Instant::now();
        let outcome = auto_assign(&state, &request);
        let elapsed = start.elapsed().as_secs_f64();

        let label = match &outcome {
            Ok(DispatchOutcome::Assigned(_)) => "assigned",
            Ok(DispatchOutcome::NoSupply) => "no_supply",
            Err(_) => "error",
        };
        state
            .metrics
            .dispatch_latency_seconds
            .with_label_values(&[label])
            .observe(elapsed);
        state
            .metrics
            .assignments_total
            .with_label_values(&[label])
            .inc();

        match outcome {
            Ok(DispatchOutcome::Assigned(assignment)) => {
                info!(
                    request_id = %assignment.request.id,
                    worker_id = %assignment.worker.id,
                    cost = assignment.request.actual_cost,
                    "request assigned"
                );
            }
            Ok(DispatchOutcome::NoSupply) => {
                warn!(
                    request_id = %request.id,
                    labor_type = %request.labor_type,
                    district = %request.district,
                    "no eligible workers; request stays pending"
                );
            }
            Err(err) => {
                error!(request_id = %request.id, error = %err, "failed to dispatch request");
            }
        }
    }

    warn!("dispatch engine stopped: request channel closed");
}

/// Runs the scored matcher over the worker pool and, on a hit, binds the
/// request to the winner. Claiming re-checks availability under the pool
/// entry's guard so two dispatches can never take the same worker.
pub fn auto_assign(state: &AppState, request: &ServiceRequest) -> Result<DispatchOutcome, AppError> {
    let pool: Vec<Worker> = state
        .workers
        .iter()
        .map(|entry| entry.value().clone())
        .collect();

    let Some(best) = find_best_match(&pool, request).cloned() else {
        return Ok(DispatchOutcome::NoSupply);
    };

    let claimed = match state.workers.get_mut(&best.id) {
        Some(mut worker) => {
            if worker.available {
                worker.available = false;
                worker.updated_at = Utc::now();
                Some(worker.clone())
            } else {
                None
            }
        }
        None => None,
    };

    let Some(worker) = claimed else {
        // The winner was taken between scoring and claiming.
        return Ok(DispatchOutcome::NoSupply);
    };

    let assignment = bind(state, request, &worker)?;
    Ok(DispatchOutcome::Assigned(assignment))
}

/// Admin action: assign a concrete worker to a request, bypassing the
/// scored matcher. The candidate list comes from
/// [`crate::engine::matching::find_exact_district_matches`] upstream.
pub fn manual_assign(
    state: &AppState,
    request_id: Uuid,
    worker_id: Uuid,
) -> Result<Assignment, AppError> {
    let request = state
        .requests
        .get(&request_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("request {request_id} not found")))?;

    let worker = {
        let mut entry = state
            .workers
            .get_mut(&worker_id)
            .ok_or_else(|| AppError::NotFound(format!("worker {worker_id} not found")))?;

        if !entry.available {
            return Err(AppError::Conflict(format!(
                "worker {worker_id} is not available"
            )));
        }

        entry.available = false;
        entry.updated_at = Utc::now();
        entry.clone()
    };

    bind(state, &request, &worker)
}

/// Marks the assignment terminal, mirrors the status onto the originating
/// request, and returns the worker to the available pool whatever the
/// outcome.
pub fn resolve_assignment(
    state: &AppState,
    assignment_id: Uuid,
    resolution: Resolution,
) -> Result<Assignment, AppError> {
    let resolved = {
        let mut entry = state
            .assignments
            .get_mut(&assignment_id)
            .ok_or_else(|| AppError::NotFound(format!("assignment {assignment_id} not found")))?;

        entry.status = match resolution {
            Resolution::Completed => AssignmentStatus::Completed,
            Resolution::Cancelled => AssignmentStatus::Cancelled,
        };
        entry.clone()
    };

    if let Some(mut request) = state.requests.get_mut(&resolved.request.id) {
        request.status = match resolution {
            Resolution::Completed => RequestStatus::Completed,
            Resolution::Cancelled => RequestStatus::Cancelled,
        };
    }

    if let Some(mut worker) = state.workers.get_mut(&resolved.worker.id) {
        worker.available = true;
        worker.updated_at = Utc::now();
    }

    state.refresh_worker_gauge();

    info!(
        assignment_id = %resolved.id,
        worker_id = %resolved.worker.id,
        outcome = ?resolution,
        "assignment resolved"
    );

    Ok(resolved)
}

/// Shared tail of both assignment paths: price the job with the claimed
/// worker's distance, snapshot request and worker, persist and announce.
fn bind(state: &AppState, request: &ServiceRequest, worker: &Worker) -> Result<Assignment, AppError> {
    let hops = district_distance(&worker.district, &request.district);
    let distance_km = f64::from(hops) * KM_PER_HOP;

    let actual_cost = service_cost(
        &request.labor_type,
        DEFAULT_DURATION_HOURS,
        request.urgency,
        distance_km,
        0.0,
        &request.extra_services,
    );

    let mut bound_request = request.clone();
    bound_request.status = RequestStatus::Assigned;
    bound_request.assigned_worker = Some(worker.id);
    bound_request.actual_cost = Some(actual_cost);
    state
        .requests
        .insert(bound_request.id, bound_request.clone());

    let assignment = Assignment {
        id: Uuid::new_v4(),
        request: bound_request,
        worker: worker.clone(),
        assigned_at: Utc::now(),
        status: AssignmentStatus::Pending,
        earnings: actual_cost as f64 * WORKER_SHARE,
        distance_km,
        travel_time_minutes: u32::from(hops) * MINUTES_PER_HOP,
    };

    state.assignments.insert(assignment.id, assignment.clone());
    let _ = state.assignment_events_tx.send(assignment.clone());
    state.refresh_worker_gauge();

    Ok(assignment)
}
