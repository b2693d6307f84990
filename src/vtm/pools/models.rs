//! Pool data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, VtmError};
use crate::vtm::node::NodeAddress;
use crate::vtm::traits::TableRow;

/// `properties.basic` of a pool
#[derive(Deserialize, Debug, Clone)]
pub struct PoolBasic {
    pub nodes_table: Vec<PoolNode>,
    pub monitors: Vec<String>,
    pub transparent: bool,
}

/// Entry of a pool's node table
#[derive(Deserialize, Debug, Clone)]
pub struct PoolNode {
    pub node: String,
}

/// Pool projected for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PoolRow {
    pub name: String,
    pub nodes: String,
    pub port: String,
    pub monitors: String,
    pub transparent: bool,
}

impl PoolRow {
    /// Project a pool. All nodes must listen on one port.
    pub fn project(name: String, basic: PoolBasic) -> Result<Self> {
        let nodes = basic
            .nodes_table
            .iter()
            .map(|n| n.node.parse::<NodeAddress>())
            .collect::<Result<Vec<_>>>()?;

        let mut ports: Vec<u16> = Vec::new();
        for node in &nodes {
            if !ports.contains(&node.port) {
                ports.push(node.port);
            }
        }

        let port = match ports.as_slice() {
            [] => String::new(),
            [port] => port.to_string(),
            many => {
                let list: Vec<String> = many.iter().map(u16::to_string).collect();
                return Err(VtmError::Invariant(format!(
                    "pool '{}' nodes use different ports: {}",
                    name,
                    list.join(", ")
                )));
            }
        };

        let hosts: Vec<&str> = nodes.iter().map(|n| n.host.as_str()).collect();

        Ok(Self {
            name,
            nodes: hosts.join(","),
            port,
            monitors: basic.monitors.join(","),
            transparent: basic.transparent,
        })
    }
}

impl TableRow for PoolRow {
    fn headers() -> Vec<String> {
        ["pool:name", "nodes", "port", "monitors", "transparent"]
            .map(String::from)
            .to_vec()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.nodes.clone(),
            self.port.clone(),
            self.monitors.clone(),
            self.transparent.to_string(),
        ]
    }
}
