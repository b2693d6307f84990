//! Traffic IP group data models

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vtm::traits::TableRow;

/// `properties.basic` of a traffic IP group
#[derive(Deserialize, Debug, Clone)]
pub struct TrafficIpGroupBasic {
    pub enabled: bool,
    #[serde(default)]
    pub ipaddresses: Vec<String>,
    #[serde(default)]
    pub machines: Vec<String>,
    pub mode: String,
    pub ip_assignment_mode: String,
    #[serde(default)]
    pub slaves: Vec<String>,
}

/// Traffic IP group projected for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrafficIpGroupRow {
    pub name: String,
    pub enabled: bool,
    pub ips: String,
    pub machines: String,
    pub mode: String,
    pub ip_assignment_mode: String,
    pub slaves: String,
}

impl TrafficIpGroupRow {
    pub fn project(name: String, basic: TrafficIpGroupBasic) -> Result<Self> {
        Ok(Self {
            name,
            enabled: basic.enabled,
            ips: basic.ipaddresses.join(","),
            machines: basic.machines.join(","),
            mode: basic.mode,
            ip_assignment_mode: basic.ip_assignment_mode,
            slaves: basic.slaves.join(","),
        })
    }
}

impl TableRow for TrafficIpGroupRow {
    fn headers() -> Vec<String> {
        [
            "traffic_ip_group:name",
            "enabled",
            "ips",
            "machines",
            "mode",
            "ip_assignment_mode",
            "slaves",
        ]
        .map(String::from)
        .to_vec()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.enabled.to_string(),
            self.ips.clone(),
            self.machines.clone(),
            self.mode.clone(),
            self.ip_assignment_mode.clone(),
            self.slaves.clone(),
        ]
    }
}
