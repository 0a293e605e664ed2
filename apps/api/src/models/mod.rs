pub mod draft;
pub mod job;
pub mod preferences;
