use std::sync::Arc;
use std::time::Duration;

use labour_dispatch::engine::dispatch::{
    auto_assign, manual_assign, resolve_assignment, run_dispatch_engine, submit_request,
    DispatchOutcome,
};
use labour_dispatch::engine::pricing::service_cost;
use labour_dispatch::engine::queue::enqueue_request;
use labour_dispatch::error::AppError;
use labour_dispatch::models::assignment::{AssignmentStatus, Resolution};
use labour_dispatch::models::request::{NewRequest, RequestStatus, ServiceRequest, Urgency};
use labour_dispatch::models::worker::Worker;
use labour_dispatch::state::AppState;
use uuid::Uuid;

fn test_state() -> (Arc<AppState>, tokio::sync::mpsc::Receiver<ServiceRequest>) {
    let (state, rx) = AppState::new(64, 64, Duration::ZERO);
    (Arc::new(state), rx)
}

fn add_worker(state: &AppState, skill: &str, district: &str, rating: f64) -> Worker {
    let worker = Worker::new(
        format!("{skill} in {district}"),
        skill,
        district,
        "+91-9876500000",
        "5 years",
        rating,
    );
    state.workers.insert(worker.id, worker.clone());
    worker
}

fn new_request(labor_type: &str, district: &str, urgency: Urgency) -> NewRequest {
    NewRequest {
        customer_id: Uuid::new_v4(),
        customer_name: "Test Customer".to_string(),
        phone: "+91-9876511111".to_string(),
        district: district.to_string(),
        address: "1 Test Street".to_string(),
        labor_type: labor_type.to_string(),
        extra_services: vec![],
        urgency,
    }
}

#[tokio::test]
async fn full_auto_dispatch_flow() {
    let (state, rx) = test_state();
    tokio::spawn(run_dispatch_engine(state.clone(), rx));

    let local = add_worker(&state, "Electrician", "Chennai", 4.2);
    add_worker(&state, "Electrician", "Kanchipuram", 4.9);

    let mut events = state.assignment_events_tx.subscribe();

    let request = submit_request(&state, new_request("Electrician", "Chennai", Urgency::Normal));
    assert_eq!(request.status, RequestStatus::Pending);
    enqueue_request(&state, request.clone()).await.unwrap();

    let assignment = tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("assignment within timeout")
        .expect("event channel open");

    // Same-district candidate wins over the better-rated neighbor.
    assert_eq!(assignment.worker.id, local.id);
    assert_eq!(assignment.status, AssignmentStatus::Pending);
    assert_eq!(assignment.distance_km, 0.0);
    assert_eq!(assignment.travel_time_minutes, 0);

    let stored_request = state.requests.get(&request.id).unwrap().clone();
    assert_eq!(stored_request.status, RequestStatus::Assigned);
    assert_eq!(stored_request.assigned_worker, Some(local.id));

    let cost = stored_request.actual_cost.expect("cost recorded");
    assert_eq!(cost, 500);
    assert_eq!(assignment.earnings, cost as f64 * 0.8);

    let stored_worker = state.workers.get(&local.id).unwrap().clone();
    assert!(!stored_worker.available);
}

#[tokio::test]
async fn no_supply_leaves_request_pending() {
    let (state, rx) = test_state();
    tokio::spawn(run_dispatch_engine(state.clone(), rx));

    add_worker(&state, "Plumber", "Chennai", 4.5);

    let request = submit_request(&state, new_request("Electrician", "Chennai", Urgency::Normal));
    enqueue_request(&state, request.clone()).await.unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;

    let stored_request = state.requests.get(&request.id).unwrap().clone();
    assert_eq!(stored_request.status, RequestStatus::Pending);
    assert!(stored_request.assigned_worker.is_none());
    assert!(state.assignments.is_empty());

    let plumber = state
        .workers
        .iter()
        .next()
        .map(|entry| entry.value().clone())
        .unwrap();
    assert!(plumber.available);
}

#[tokio::test]
async fn auto_assign_prices_with_the_winning_workers_distance() {
    let (state, _rx) = test_state();

    // Only a neighboring-district electrician: one hop, 25 km.
    add_worker(&state, "Electrician", "Kanchipuram", 4.0);

    let request = submit_request(&state, new_request("Electrician", "Chennai", Urgency::Urgent));
    let outcome = auto_assign(&state, &request).unwrap();

    let DispatchOutcome::Assigned(assignment) = outcome else {
        panic!("expected an assignment");
    };

    assert_eq!(assignment.distance_km, 25.0);
    assert_eq!(assignment.travel_time_minutes, 30);

    let expected = service_cost("Electrician", 4.0, Urgency::Urgent, 25.0, 0.0, &[]);
    assert_eq!(assignment.request.actual_cost, Some(expected));
}

#[tokio::test]
async fn resolution_restores_worker_and_mirrors_request_status() {
    for (resolution, expected_status) in [
        (Resolution::Completed, RequestStatus::Completed),
        (Resolution::Cancelled, RequestStatus::Cancelled),
    ] {
        let (state, _rx) = test_state();
        let worker = add_worker(&state, "Carpenter", "Salem", 4.7);

        let request = submit_request(&state, new_request("Carpenter", "Salem", Urgency::Normal));
        let DispatchOutcome::Assigned(assignment) = auto_assign(&state, &request).unwrap() else {
            panic!("expected an assignment");
        };
        assert!(!state.workers.get(&worker.id).unwrap().available);

        let resolved = resolve_assignment(&state, assignment.id, resolution).unwrap();
        match resolution {
            Resolution::Completed => assert_eq!(resolved.status, AssignmentStatus::Completed),
            Resolution::Cancelled => assert_eq!(resolved.status, AssignmentStatus::Cancelled),
        }

        assert!(state.workers.get(&worker.id).unwrap().available);
        assert_eq!(
            state.requests.get(&request.id).unwrap().status,
            expected_status
        );
    }
}

#[tokio::test]
async fn manual_assign_binds_the_chosen_worker() {
    let (state, _rx) = test_state();
    let chosen = add_worker(&state, "Cook", "Coimbatore", 4.1);
    add_worker(&state, "Cook", "Coimbatore", 4.9);

    let request = submit_request(&state, new_request("Cook", "Coimbatore", Urgency::Normal));

    // The admin can override the rating order and pick a concrete worker.
    let assignment = manual_assign(&state, request.id, chosen.id).unwrap();
    assert_eq!(assignment.worker.id, chosen.id);
    assert!(!state.workers.get(&chosen.id).unwrap().available);

    let stored_request = state.requests.get(&request.id).unwrap().clone();
    assert_eq!(stored_request.status, RequestStatus::Assigned);
    assert_eq!(stored_request.assigned_worker, Some(chosen.id));

    let expected = service_cost("Cook", 4.0, Urgency::Normal, 0.0, 0.0, &[]);
    assert_eq!(stored_request.actual_cost, Some(expected));
    assert_eq!(assignment.earnings, expected as f64 * 0.8);
}

#[tokio::test]
async fn manual_assign_rejects_unknown_ids_and_busy_workers() {
    let (state, _rx) = test_state();
    let worker = add_worker(&state, "Mason", "Madurai", 4.5);
    let request = submit_request(&state, new_request("Mason", "Madurai", Urgency::Normal));

    let err = manual_assign(&state, Uuid::new_v4(), worker.id).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = manual_assign(&state, request.id, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    manual_assign(&state, request.id, worker.id).unwrap();
    let second = submit_request(&state, new_request("Mason", "Madurai", Urgency::Normal));
    let err = manual_assign(&state, second.id, worker.id).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn resolve_unknown_assignment_fails_loudly() {
    let (state, _rx) = test_state();
    let err = resolve_assignment(&state, Uuid::new_v4(), Resolution::Completed).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn a_claimed_worker_is_never_matched_twice() {
    let (state, _rx) = test_state();
    let only = add_worker(&state, "Welder", "Coimbatore", 4.8);

    let first = submit_request(&state, new_request("Welder", "Coimbatore", Urgency::Normal));
    let DispatchOutcome::Assigned(assignment) = auto_assign(&state, &first).unwrap() else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.worker.id, only.id);

    let second = submit_request(&state, new_request("Welder", "Coimbatore", Urgency::Normal));
    let outcome = auto_assign(&state, &second).unwrap();
    assert!(matches!(outcome, DispatchOutcome::NoSupply));
    assert_eq!(
        state.requests.get(&second.id).unwrap().status,
        RequestStatus::Pending
    );
}

#[tokio::test]
async fn dispatch_metrics_track_outcomes() {
    let (state, rx) = test_state();
    tokio::spawn(run_dispatch_engine(state.clone(), rx));

    add_worker(&state, "Barber", "Erode", 4.2);

    let matched = submit_request(&state, new_request("Barber", "Erode", Urgency::Normal));
    enqueue_request(&state, matched).await.unwrap();

    let unmatched = submit_request(&state, new_request("Roofer", "Erode", Urgency::Normal));
    enqueue_request(&state, unmatched).await.unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;

    let report = state.metrics.encode().unwrap();
    assert!(report.contains("assignments_total{outcome=\"assigned\"} 1"));
    assert!(report.contains("assignments_total{outcome=\"no_supply\"} 1"));
}
