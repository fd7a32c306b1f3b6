pub mod dispatch;
pub mod matching;
pub mod pricing;
pub mod queue;
