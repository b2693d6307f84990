//! Resource categories known to the tool

use std::fmt;
use std::str::FromStr;

use crate::error::VtmError;

/// Top-level configuration category on the appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    ExtraFiles,
    LicenseKeys,
    MonitorScripts,
    Monitors,
    Persistence,
    Pools,
    Rules,
    TrafficIpGroups,
    TrafficManagers,
    VirtualServers,
}

impl ResourceType {
    /// Every known category, in display order
    pub const ALL: [ResourceType; 10] = [
        ResourceType::ExtraFiles,
        ResourceType::LicenseKeys,
        ResourceType::MonitorScripts,
        ResourceType::Monitors,
        ResourceType::Persistence,
        ResourceType::Pools,
        ResourceType::Rules,
        ResourceType::TrafficIpGroups,
        ResourceType::TrafficManagers,
        ResourceType::VirtualServers,
    ];

    /// All categories. Does not touch the network.
    pub fn all() -> &'static [ResourceType] {
        &Self::ALL
    }

    /// API keys of all categories
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.key()).collect()
    }

    /// Path segment used by the REST API
    pub fn key(&self) -> &'static str {
        match self {
            ResourceType::ExtraFiles => "extra_files",
            ResourceType::LicenseKeys => "license_keys",
            ResourceType::MonitorScripts => "monitor_scripts",
            ResourceType::Monitors => "monitors",
            ResourceType::Persistence => "persistence",
            ResourceType::Pools => "pools",
            ResourceType::Rules => "rules",
            ResourceType::TrafficIpGroups => "traffic_ip_groups",
            ResourceType::TrafficManagers => "traffic_managers",
            ResourceType::VirtualServers => "virtual_servers",
        }
    }

    /// Singular label used in table headers (`pool:name`)
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceType::Pools => "pool",
            ResourceType::TrafficIpGroups => "traffic_ip_group",
            ResourceType::VirtualServers => "virtual_server",
            other => other.key(),
        }
    }
}

impl FromStr for ResourceType {
    type Err = VtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vs" => return Ok(ResourceType::VirtualServers),
            "tip" => return Ok(ResourceType::TrafficIpGroups),
            _ => {}
        }
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.key() == s)
            .ok_or_else(|| VtmError::UnknownResource(s.to_string()))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
