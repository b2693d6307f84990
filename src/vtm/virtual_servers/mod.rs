//! Virtual server resources

mod api;
mod models;

pub use models::{VirtualServerBasic, VirtualServerRow};
