//! Traffic Manager API client module
//!
//! Read-only access to the active configuration tree of the REST API.

mod client;
pub mod commands;
mod node;
pub mod pools;
mod resources;
mod settings;
pub mod traffic_ip_groups;
pub mod traits;
pub mod virtual_servers;

pub use client::VtmClient;
pub use commands::{render_target, resolve_target, run_command, Target};
pub use node::NodeAddress;
pub use pools::{PoolBasic, PoolRow};
pub use resources::ResourceType;
pub use settings::Settings;
pub use traffic_ip_groups::{TrafficIpGroupBasic, TrafficIpGroupRow};
pub use traits::{NameRow, TableRow};
pub use virtual_servers::{VirtualServerBasic, VirtualServerRow};
