//! vtmctl - Inspect Traffic Manager configuration
//!
//! A CLI tool to list and explore the active configuration of a traffic
//! management appliance through its REST API.
//!
//! # Features
//!
//! - Tables of pools, virtual servers and traffic IP groups
//! - Name listings for every other configuration category
//! - Raw configuration of a single instance as JSON or YAML
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Concurrent, order-preserving detail fetches
//!
//! # Example
//!
//! ```bash
//! export vtm_url=https://vtm.example.com:9070 vtm_user=admin vtm_pswd=secret
//!
//! # Pools with their nodes, port and monitors
//! vtmctl -r pools -n all
//!
//! # Virtual servers as JSON
//! vtmctl -r vs -n all -o json
//!
//! # Raw configuration of one traffic IP group
//! vtmctl -r tip -n web-tip
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;
pub mod vtm;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, VtmError};
pub use vtm::{
    run_command, NodeAddress, PoolRow, ResourceType, Settings, Target, TrafficIpGroupRow,
    VirtualServerRow, VtmClient,
};
