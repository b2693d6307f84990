//! Pool resources

mod api;
mod models;

pub use models::{PoolBasic, PoolNode, PoolRow};
