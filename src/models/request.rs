use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Assigned,
    Completed,
    Cancelled,
}

/// A customer's ask for a skill in a district. Created `Pending`; flips to
/// `Assigned` once a worker is bound, then mirrors the terminal status of
/// its assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub labor_type: String,
    pub extra_services: Vec<String>,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub assigned_worker: Option<Uuid>,
    pub actual_cost: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a new request; the lifecycle fills in identity,
/// status, and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRequest {
    pub customer_id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub labor_type: String,
    pub extra_services: Vec<String>,
    pub urgency: Urgency,
}
