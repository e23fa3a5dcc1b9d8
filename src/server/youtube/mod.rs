pub mod model;
pub mod web_api;
