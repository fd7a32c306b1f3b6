//! Sample worker roster for demos and tests. Deterministic: everyone
//! starts available, unlike the randomised source data.

use crate::models::worker::Worker;

pub fn sample_workers() -> Vec<Worker> {
    vec![
        Worker::new("John Smith", "Electrician", "Chennai", "+91-9876543213", "5 years", 4.8)
            .with_emergency_availability(),
        Worker::new("Maria Garcia", "Plumber", "Chennai", "+91-9876543214", "3 years", 4.6),
        Worker::new("David Johnson", "Carpenter", "Chennai", "+91-9876543215", "7 years", 4.9),
        Worker::new("Sarah Wilson", "Painter", "Chennai", "+91-9876543216", "4 years", 4.7),
        Worker::new("Michael Brown", "AC Technician", "Chennai", "+91-9876543217", "6 years", 4.5)
            .with_emergency_availability(),
        Worker::new("Lisa Davis", "Cleaner", "Coimbatore", "+91-9876543218", "2 years", 4.4),
        Worker::new("Robert Miller", "Car Mechanic", "Coimbatore", "+91-9876543219", "8 years", 4.8),
        Worker::new("Jennifer Taylor", "Cook", "Coimbatore", "+91-9876543220", "3 years", 4.6),
        Worker::new("James Anderson", "Welder", "Coimbatore", "+91-9876543221", "5 years", 4.7),
        Worker::new("Emma Thompson", "Beautician", "Coimbatore", "+91-9876543222", "4 years", 4.5),
        Worker::new("William Garcia", "Mason", "Madurai", "+91-9876543223", "6 years", 4.6),
        Worker::new("Olivia Martinez", "Tutor", "Madurai", "+91-9876543224", "3 years", 4.8),
        Worker::new("Benjamin Rodriguez", "Driver", "Madurai", "+91-9876543225", "7 years", 4.4),
        Worker::new("Sophia Lee", "Gardener", "Madurai", "+91-9876543226", "2 years", 4.3),
        Worker::new("Alexander Walker", "Security Guard", "Madurai", "+91-9876543227", "5 years", 4.5),
        Worker::new("Charlotte Hall", "Housekeeper", "Salem", "+91-9876543228", "4 years", 4.7),
        Worker::new("Daniel Allen", "Photographer", "Salem", "+91-9876543229", "6 years", 4.9),
        Worker::new("Amelia Young", "Tailor", "Salem", "+91-9876543230", "8 years", 4.6),
        Worker::new("Matthew King", "Locksmith", "Salem", "+91-9876543231", "5 years", 4.4),
        Worker::new("Harper Wright", "Fitness Trainer", "Salem", "+91-9876543232", "3 years", 4.8),
        Worker::new("Ethan Lopez", "Computer Technician", "Erode", "+91-9876543233", "4 years", 4.5),
        Worker::new("Abigail Hill", "Mobile Repair", "Erode", "+91-9876543234", "2 years", 4.3),
        Worker::new("Jacob Scott", "Pest Control Specialist", "Erode", "+91-9876543235", "6 years", 4.7),
        Worker::new("Mia Green", "Massage Therapist", "Erode", "+91-9876543236", "5 years", 4.6),
        Worker::new("Noah Adams", "Delivery Person", "Erode", "+91-9876543237", "3 years", 4.4),
    ]
}
