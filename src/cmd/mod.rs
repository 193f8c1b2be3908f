pub mod analyze;
pub mod log;
