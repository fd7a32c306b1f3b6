use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered laborer. `skill` and `experience` are free text; matching
/// and scoring treat them leniently rather than validating them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub skill: String,
    pub district: String,
    pub phone: String,
    pub experience: String,
    pub rating: f64,
    pub available: bool,
    pub emergency_available: bool,
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    pub fn new(
        name: impl Into<String>,
        skill: impl Into<String>,
        district: impl Into<String>,
        phone: impl Into<String>,
        experience: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill: skill.into(),
            district: district.into(),
            phone: phone.into(),
            experience: experience.into(),
            rating: rating.clamp(0.0, 5.0),
            available: true,
            emergency_available: false,
            updated_at: Utc::now(),
        }
    }

    pub fn with_emergency_availability(mut self) -> Self {
        self.emergency_available = true;
        self
    }
}
