use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::request::ServiceRequest;
use crate::models::worker::Worker;

/// Itemised contribution of each scoring factor to a worker's match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub distance_points: f64,
    pub rating_points: f64,
    pub availability_bonus: f64,
    pub emergency_bonus: f64,
    pub experience_points: f64,
}

impl MatchScore {
    pub fn total(&self) -> f64 {
        self.distance_points
            + self.rating_points
            + self.availability_bonus
            + self.emergency_bonus
            + self.experience_points
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Terminal outcomes a worker or admin can report for an assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Resolution {
    Completed,
    Cancelled,
}

/// The binding of a request to a worker, with the request and worker
/// snapshotted at assignment time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub request: ServiceRequest,
    pub worker: Worker,
    pub assigned_at: DateTime<Utc>,
    pub status: AssignmentStatus,
    /// Worker's share of the actual cost (80%, fixed 20% platform fee).
    pub earnings: f64,
    pub distance_km: f64,
    pub travel_time_minutes: u32,
}
