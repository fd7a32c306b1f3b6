pub mod assignment;
pub mod request;
pub mod worker;
