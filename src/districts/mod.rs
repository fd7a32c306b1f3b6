//! Static district proximity model for the Tamil Nadu service area.
//!
//! Adjacency is a fixed hand-authored table, not derived from coordinates.
//! The table is intentionally kept exactly as authored, including entries
//! that are not mirrored by the listed neighbor.

/// Discrete hop distance returned for districts with no 2-hop path.
pub const FAR: u8 = 3;

pub const ALL_DISTRICTS: &[&str] = &[
    "Ariyalur",
    "Chengalpattu",
    "Chennai",
    "Coimbatore",
    "Cuddalore",
    "Dharmapuri",
    "Dindigul",
    "Erode",
    "Kallakurichi",
    "Kanchipuram",
    "Kanyakumari",
    "Karur",
    "Krishnagiri",
    "Madurai",
    "Mayiladuthurai",
    "Nagapattinam",
    "Namakkal",
    "Nilgiris (Udhagamandalam)",
    "Perambalur",
    "Pudukkottai",
    "Ramanathapuram",
    "Ranipet",
    "Salem",
    "Sivaganga",
    "Tenkasi",
    "Thanjavur",
    "Theni",
    "Thoothukudi (Tuticorin)",
    "Tiruchirappalli (Trichy)",
    "Tirunelveli",
    "Tirupathur",
    "Tiruppur",
    "Tiruvallur",
    "Tiruvannamalai",
    "Tiruvarur",
    "Vellore",
    "Viluppuram",
    "Virudhunagar",
];

/// Directly adjacent districts. Unknown districts have no neighbors.
pub fn neighbors(district: &str) -> &'static [&'static str] {
    match district {
        "Chennai" => &["Tiruvallur", "Kanchipuram", "Chengalpattu", "Ranipet"],
        "Coimbatore" => &["Tiruppur", "Erode", "Nilgiris (Udhagamandalam)", "Karur"],
        "Madurai" => &["Dindigul", "Theni", "Virudhunagar", "Sivaganga"],
        "Salem" => &["Namakkal", "Dharmapuri", "Erode", "Krishnagiri"],
        "Erode" => &["Salem", "Namakkal", "Karur", "Coimbatore", "Tiruppur"],
        "Vellore" => &["Tirupathur", "Krishnagiri", "Dharmapuri", "Ranipet"],
        "Tiruppur" => &["Coimbatore", "Erode", "Karur", "Dindigul"],
        "Thanjavur" => &[
            "Tiruvarur",
            "Nagapattinam",
            "Pudukkottai",
            "Tiruchirappalli (Trichy)",
        ],
        "Tiruchirappalli (Trichy)" => &["Thanjavur", "Pudukkottai", "Karur", "Perambalur"],
        "Tirunelveli" => &[
            "Tenkasi",
            "Thoothukudi (Tuticorin)",
            "Virudhunagar",
            "Kanyakumari",
        ],
        "Kanchipuram" => &["Chennai", "Chengalpattu", "Tiruvallur", "Vellore"],
        "Cuddalore" => &["Viluppuram", "Kallakurichi", "Chengalpattu", "Mayiladuthurai"],
        "Dharmapuri" => &["Salem", "Krishnagiri", "Vellore", "Tirupathur"],
        "Dindigul" => &["Madurai", "Theni", "Tiruppur", "Karur"],
        "Kallakurichi" => &["Viluppuram", "Cuddalore", "Salem", "Tiruvannamalai"],
        "Karur" => &["Tiruchirappalli (Trichy)", "Erode", "Dindigul", "Namakkal"],
        "Krishnagiri" => &["Dharmapuri", "Vellore", "Tirupathur", "Salem"],
        "Mayiladuthurai" => &["Nagapattinam", "Thanjavur", "Tiruvarur", "Cuddalore"],
        "Nagapattinam" => &["Mayiladuthurai", "Thanjavur", "Tiruvarur"],
        "Namakkal" => &["Salem", "Erode", "Karur", "Tiruchirappalli (Trichy)"],
        "Nilgiris (Udhagamandalam)" => &["Coimbatore", "Erode"],
        "Perambalur" => &["Tiruchirappalli (Trichy)", "Ariyalur", "Cuddalore"],
        "Pudukkottai" => &[
            "Thanjavur",
            "Tiruchirappalli (Trichy)",
            "Sivaganga",
            "Ramanathapuram",
        ],
        "Ramanathapuram" => &["Pudukkottai", "Sivaganga", "Virudhunagar"],
        "Ranipet" => &["Vellore", "Tirupathur", "Chennai", "Tiruvallur"],
        "Sivaganga" => &["Madurai", "Pudukkottai", "Ramanathapuram", "Virudhunagar"],
        "Tenkasi" => &["Tirunelveli", "Virudhunagar", "Theni"],
        "Theni" => &["Madurai", "Dindigul", "Tenkasi", "Virudhunagar"],
        "Thoothukudi (Tuticorin)" => &["Tirunelveli", "Virudhunagar"],
        "Tirupathur" => &["Vellore", "Krishnagiri", "Dharmapuri", "Ranipet"],
        "Tiruvallur" => &["Chennai", "Kanchipuram", "Ranipet", "Vellore"],
        "Tiruvannamalai" => &["Vellore", "Kallakurichi", "Viluppuram", "Kanchipuram"],
        "Tiruvarur" => &["Thanjavur", "Nagapattinam", "Mayiladuthurai"],
        "Viluppuram" => &["Kallakurichi", "Cuddalore", "Tiruvannamalai", "Kanchipuram"],
        "Virudhunagar" => &[
            "Madurai",
            "Sivaganga",
            "Ramanathapuram",
            "Tenkasi",
            "Theni",
            "Tirunelveli",
        ],
        "Ariyalur" => &["Perambalur", "Tiruchirappalli (Trichy)", "Thanjavur"],
        "Chengalpattu" => &["Chennai", "Kanchipuram", "Tiruvallur", "Cuddalore"],
        "Kanyakumari" => &["Tirunelveli", "Tenkasi"],
        _ => &[],
    }
}

/// Hop distance between two districts over the static adjacency graph:
/// 0 same, 1 adjacent, 2 reachable through one intermediate, 3 far.
pub fn district_distance(a: &str, b: &str) -> u8 {
    if a == b {
        return 0;
    }

    let nearby = neighbors(a);
    if nearby.contains(&b) {
        return 1;
    }

    for neighbor in nearby {
        if neighbors(neighbor).contains(&b) {
            return 2;
        }
    }

    FAR
}

/// Every district a worker based in `home` can serve: the home district,
/// its neighbors, and their neighbors, deduplicated in first-seen order.
/// A worker always serves their own district, known to the table or not.
pub fn serviceable_districts(home: &str) -> Vec<String> {
    let mut serviceable = vec![home.to_string()];

    for &neighbor in neighbors(home) {
        if !serviceable.iter().any(|d| d.as_str() == neighbor) {
            serviceable.push(neighbor.to_string());
        }
        for &second in neighbors(neighbor) {
            if !serviceable.iter().any(|d| d.as_str() == second) {
                serviceable.push(second.to_string());
            }
        }
    }

    serviceable
}

pub fn can_serve(worker_district: &str, customer_district: &str) -> bool {
    district_distance(worker_district, customer_district) <= 2
}

#[cfg(test)]
mod tests {
    use super::{can_serve, district_distance, neighbors, serviceable_districts, ALL_DISTRICTS};

    #[test]
    fn same_district_is_distance_zero() {
        for district in ALL_DISTRICTS {
            assert_eq!(district_distance(district, district), 0);
        }
    }

    #[test]
    fn adjacent_district_is_distance_one() {
        assert_eq!(district_distance("Chennai", "Kanchipuram"), 1);
        assert_eq!(district_distance("Madurai", "Theni"), 1);
    }

    #[test]
    fn two_hop_district_is_distance_two() {
        // Chennai -> Kanchipuram -> Vellore
        assert_eq!(district_distance("Chennai", "Vellore"), 2);
    }

    #[test]
    fn unconnected_districts_are_far() {
        assert_eq!(district_distance("Chennai", "Kanyakumari"), 3);
    }

    #[test]
    fn distance_is_bounded_for_all_pairs() {
        for a in ALL_DISTRICTS {
            for b in ALL_DISTRICTS {
                assert!(district_distance(a, b) <= 3);
            }
        }
    }

    #[test]
    fn unknown_district_has_no_neighbors_and_is_far() {
        assert!(neighbors("Atlantis").is_empty());
        assert_eq!(district_distance("Atlantis", "Chennai"), 3);
        assert_eq!(district_distance("Atlantis", "Atlantis"), 0);
    }

    #[test]
    fn adjacency_is_not_forced_symmetric() {
        // The source table lists Salem as a neighbor of Kallakurichi
        // without the reverse edge; preserved as authored.
        assert!(neighbors("Kallakurichi").contains(&"Salem"));
        assert!(!neighbors("Salem").contains(&"Kallakurichi"));
    }

    #[test]
    fn can_serve_matches_distance_threshold() {
        for a in ALL_DISTRICTS {
            for b in ALL_DISTRICTS {
                assert_eq!(can_serve(a, b), district_distance(a, b) <= 2);
            }
        }
    }

    #[test]
    fn serviceable_set_contains_home_and_neighbors_without_duplicates() {
        let serviceable = serviceable_districts("Chennai");
        assert_eq!(serviceable[0], "Chennai");
        for &neighbor in neighbors("Chennai") {
            assert!(serviceable.iter().any(|d| d == neighbor));
        }

        let mut deduped = serviceable.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), serviceable.len());
    }

    #[test]
    fn serviceable_set_agrees_with_can_serve() {
        let serviceable = serviceable_districts("Salem");
        for &district in ALL_DISTRICTS {
            if serviceable.iter().any(|d| d == district) {
                assert!(can_serve("Salem", district));
            }
        }
    }

    #[test]
    fn unknown_home_serves_only_itself() {
        assert_eq!(serviceable_districts("Atlantis"), vec!["Atlantis"]);
        assert!(can_serve("Atlantis", "Atlantis"));
    }
}
