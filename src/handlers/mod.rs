pub mod jobs;
pub mod pro;
pub mod service_areas;
