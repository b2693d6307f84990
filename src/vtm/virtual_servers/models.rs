//! Virtual server data models

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vtm::traits::TableRow;

/// `properties.basic` of a virtual server
#[derive(Deserialize, Debug, Clone)]
pub struct VirtualServerBasic {
    pub port: u16,
    pub enabled: bool,
    pub pool: String,
    #[serde(default)]
    pub listen_on_traffic_ips: Vec<String>,
}

/// Virtual server projected for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VirtualServerRow {
    pub name: String,
    pub port: u16,
    pub enabled: bool,
    pub pool: String,
    pub vips: String,
}

impl VirtualServerRow {
    pub fn project(name: String, basic: VirtualServerBasic) -> Result<Self> {
        Ok(Self {
            name,
            port: basic.port,
            enabled: basic.enabled,
            pool: basic.pool,
            vips: basic.listen_on_traffic_ips.join(","),
        })
    }
}

impl TableRow for VirtualServerRow {
    fn headers() -> Vec<String> {
        ["virtual_server:name", "port", "enabled", "pool", "vips"]
            .map(String::from)
            .to_vec()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.port.to_string(),
            self.enabled.to_string(),
            self.pool.clone(),
            self.vips.clone(),
        ]
    }
}
