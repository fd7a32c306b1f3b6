use crate::districts::{can_serve, district_distance};
use crate::models::assignment::MatchScore;
use crate::models::request::{ServiceRequest, Urgency};
use crate::models::worker::Worker;

const AVAILABILITY_BONUS: f64 = 50.0;
const EMERGENCY_BONUS: f64 = 30.0;
const EXPERIENCE_POINTS_CAP: f64 = 20.0;

/// Lenient skill comparison: the worker's skill contains the requested
/// labor type, case-insensitively. "Electrician" serves a request for
/// "electrician"; "Deep Cleaning Specialist" serves "cleaning".
pub fn skill_matches(worker_skill: &str, labor_type: &str) -> bool {
    worker_skill
        .to_lowercase()
        .contains(&labor_type.to_lowercase())
}

/// Leading integer of a free-text experience field ("5 years" -> 5).
/// Unparseable input defaults to 1 so scoring stays total, and a parsed
/// zero is treated the same way, matching the source's falsy fallback.
pub fn experience_years(experience: &str) -> u32 {
    let digits: String = experience
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse() {
        Ok(0) | Err(_) => 1,
        Ok(years) => years,
    }
}

/// Scores one candidate against the customer's district and urgency.
pub fn score_worker(
    worker: &Worker,
    customer_district: &str,
    urgency: Urgency,
) -> (f64, MatchScore) {
    let distance_points = match district_distance(&worker.district, customer_district) {
        0 => 100.0,
        1 => 80.0,
        2 => 60.0,
        _ => 0.0,
    };

    let breakdown = MatchScore {
        distance_points,
        rating_points: worker.rating * 10.0,
        availability_bonus: if worker.available {
            AVAILABILITY_BONUS
        } else {
            0.0
        },
        emergency_bonus: if worker.emergency_available && urgency == Urgency::Emergency {
            EMERGENCY_BONUS
        } else {
            0.0
        },
        experience_points: (f64::from(experience_years(&worker.experience)) * 2.0)
            .min(EXPERIENCE_POINTS_CAP),
    };

    (breakdown.total(), breakdown)
}

fn is_candidate(worker: &Worker, request: &ServiceRequest) -> bool {
    skill_matches(&worker.skill, &request.labor_type)
        && can_serve(&worker.district, &request.district)
        && worker.available
}

/// Automatic matching policy: candidates within the 2-hop serviceable set,
/// ranked by score. Ties keep the earliest candidate in pool order.
pub fn find_best_match<'a>(workers: &'a [Worker], request: &ServiceRequest) -> Option<&'a Worker> {
    let mut best: Option<(&Worker, f64)> = None;

    for worker in workers.iter().filter(|w| is_candidate(w, request)) {
        let (score, _) = score_worker(worker, &request.district, request.urgency);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((worker, score)),
        }
    }

    best.map(|(worker, _)| worker)
}

/// Manual (admin) matching policy: same district only, matched by
/// case-insensitive equality, ranked by rating alone. Deliberately a
/// separate entry point from [`find_best_match`].
pub fn find_exact_district_matches(workers: &[Worker], request: &ServiceRequest) -> Vec<Worker> {
    let mut matches: Vec<Worker> = workers
        .iter()
        .filter(|worker| {
            skill_matches(&worker.skill, &request.labor_type)
                && worker.district.to_lowercase() == request.district.to_lowercase()
                && worker.available
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    matches
}
