//! Traffic IP group resources

mod api;
mod models;

pub use models::{TrafficIpGroupBasic, TrafficIpGroupRow};
