pub mod job;
pub mod profile;
pub mod service_area;
