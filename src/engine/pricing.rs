use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::request::Urgency;

/// Per-skill price tier in rupees. `emergency_rate` is carried from the
/// source tariff but the cost formula applies the flat urgency multiplier
/// instead; see DESIGN.md.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingTier {
    pub base_price: f64,
    pub hourly_rate: f64,
    pub emergency_rate: f64,
}

const DEFAULT_TIER: PricingTier = PricingTier {
    base_price: 400.0,
    hourly_rate: 60.0,
    emergency_rate: 120.0,
};

/// Hours covered by the base price before hourly billing starts.
const BASE_DURATION_HOURS: f64 = 4.0;
/// Free travel radius; beyond it distance is billed per km.
const FREE_TRAVEL_KM: f64 = 5.0;
const PER_KM_CHARGE: f64 = 10.0;
/// Each add-on service costs this fraction of the base price.
const EXTRA_SERVICE_SHARE: f64 = 0.2;

pub fn pricing_tier(labor_type: &str) -> PricingTier {
    let tier = |base_price, hourly_rate, emergency_rate| PricingTier {
        base_price,
        hourly_rate,
        emergency_rate,
    };

    match labor_type {
        "Electrician" => tier(500.0, 80.0, 150.0),
        "Plumber" => tier(450.0, 75.0, 140.0),
        "Carpenter" => tier(600.0, 90.0, 160.0),
        "Mason" => tier(550.0, 85.0, 150.0),
        "Welder" => tier(650.0, 100.0, 180.0),
        "Painter" => tier(400.0, 70.0, 120.0),
        "Tile Worker" => tier(500.0, 80.0, 140.0),
        "Roofer" => tier(600.0, 90.0, 160.0),
        "Cleaner" => tier(250.0, 40.0, 80.0),
        "Housekeeper" => tier(300.0, 50.0, 90.0),
        "Cook" => tier(400.0, 60.0, 100.0),
        "Babysitter" => tier(300.0, 50.0, 90.0),
        "Elder Care" => tier(350.0, 55.0, 100.0),
        "Laundry Service" => tier(200.0, 35.0, 70.0),
        "AC Technician" => tier(600.0, 100.0, 200.0),
        "Refrigerator Repair" => tier(500.0, 80.0, 160.0),
        "Computer Technician" => tier(450.0, 75.0, 150.0),
        "Mobile Repair" => tier(300.0, 50.0, 100.0),
        "CCTV Installer" => tier(800.0, 120.0, 220.0),
        "Car Mechanic" => tier(500.0, 80.0, 150.0),
        "Bike Mechanic" => tier(300.0, 50.0, 100.0),
        "Tyre Puncture" => tier(100.0, 30.0, 60.0),
        "Car Wash" => tier(200.0, 35.0, 70.0),
        "Barber" => tier(150.0, 30.0, 60.0),
        "Hair Stylist" => tier(400.0, 60.0, 120.0),
        "Beautician" => tier(500.0, 80.0, 150.0),
        "Massage Therapist" => tier(600.0, 90.0, 170.0),
        _ => DEFAULT_TIER,
    }
}

fn urgency_multiplier(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::Normal => 1.0,
        Urgency::Urgent => 1.3,
        Urgency::Emergency => 1.5,
    }
}

/// Quoted cost in whole rupees. The urgency multiplier applies to the
/// labor subtotal only; travel, material, and add-on charges come after.
pub fn service_cost(
    labor_type: &str,
    duration_hours: f64,
    urgency: Urgency,
    distance_km: f64,
    material_cost: f64,
    extra_services: &[String],
) -> i64 {
    let tier = pricing_tier(labor_type);

    let mut total = if duration_hours <= BASE_DURATION_HOURS {
        tier.base_price
    } else {
        tier.base_price + (duration_hours - BASE_DURATION_HOURS) * tier.hourly_rate
    };

    total *= urgency_multiplier(urgency);

    if distance_km > FREE_TRAVEL_KM {
        total += (distance_km - FREE_TRAVEL_KM) * PER_KM_CHARGE;
    }

    total += material_cost;
    total += extra_services.len() as f64 * (tier.base_price * EXTRA_SERVICE_SHARE);

    total.round() as i64
}

/// Itemised view of [`service_cost`]; `total` always equals the quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub base_service: f64,
    pub additional_hours: f64,
    pub urgency_charge: f64,
    pub travel_charge: f64,
    pub material_cost: f64,
    pub extra_services: f64,
    pub total: i64,
}

pub fn pricing_breakdown(
    labor_type: &str,
    duration_hours: f64,
    urgency: Urgency,
    distance_km: f64,
    material_cost: f64,
    extra_services: &[String],
) -> PricingBreakdown {
    let tier = pricing_tier(labor_type);

    let base_service = tier.base_price;
    let additional_hours = if duration_hours > BASE_DURATION_HOURS {
        (duration_hours - BASE_DURATION_HOURS) * tier.hourly_rate
    } else {
        0.0
    };

    let subtotal = base_service + additional_hours;
    let urgency_charge = subtotal * (urgency_multiplier(urgency) - 1.0);

    let travel_charge = if distance_km > FREE_TRAVEL_KM {
        (distance_km - FREE_TRAVEL_KM) * PER_KM_CHARGE
    } else {
        0.0
    };

    let extra_services_charge =
        extra_services.len() as f64 * (tier.base_price * EXTRA_SERVICE_SHARE);

    let total = (subtotal + urgency_charge + travel_charge + material_cost + extra_services_charge)
        .round() as i64;

    PricingBreakdown {
        base_service,
        additional_hours,
        urgency_charge,
        travel_charge,
        material_cost,
        extra_services: extra_services_charge,
        total,
    }
}

fn base_duration_hours(labor_type: &str) -> f64 {
    match labor_type {
        "Electrician" => 3.0,
        "Plumber" => 2.5,
        "Carpenter" => 6.0,
        "Painter" => 8.0,
        "Cleaner" => 4.0,
        "AC Technician" => 2.0,
        "Computer Technician" => 1.5,
        "Car Mechanic" => 3.0,
        "Beautician" => 2.0,
        "Cook" => 4.0,
        _ => 3.0,
    }
}

/// Human-readable duration estimate: base hours per skill plus half an
/// hour per add-on service.
pub fn estimated_duration(labor_type: &str, extra_services: &[String]) -> String {
    let total_hours = base_duration_hours(labor_type) + extra_services.len() as f64 * 0.5;

    if total_hours < 1.0 {
        format!("{} minutes", (total_hours * 60.0).round() as i64)
    } else if total_hours < 2.0 {
        let whole = total_hours.floor();
        let minutes = ((total_hours - whole) * 60.0).round() as i64;
        format!("{} hour {} minutes", whole as i64, minutes)
    } else {
        format!("{} hours", total_hours.round() as i64)
    }
}

/// Presentation hint describing when service can start. Reads the local
/// wall clock; see [`availability_window_at`] for the clock-injected form.
pub fn availability_window(urgency: Urgency) -> String {
    availability_window_at(urgency, Local::now().hour())
}

pub fn availability_window_at(urgency: Urgency, hour: u32) -> String {
    match urgency {
        Urgency::Emergency => "Available 24/7".to_string(),
        Urgency::Urgent => {
            if (6..=22).contains(&hour) {
                "Available within 2 hours".to_string()
            } else {
                "Available from 6:00 AM".to_string()
            }
        }
        Urgency::Normal => {
            if (8..=18).contains(&hour) {
                "Available today".to_string()
            } else {
                "Available tomorrow".to_string()
            }
        }
    }
}
