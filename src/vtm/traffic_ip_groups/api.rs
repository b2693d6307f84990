//! Traffic IP group API operations

use crate::error::Result;
use crate::vtm::{ResourceType, VtmClient};

use super::models::{TrafficIpGroupBasic, TrafficIpGroupRow};

impl VtmClient {
    /// Fetch every traffic IP group and project it into a row
    pub async fn get_traffic_ip_group_rows(&self) -> Result<Vec<TrafficIpGroupRow>> {
        self.fetch_projected::<TrafficIpGroupBasic, _, _>(
            ResourceType::TrafficIpGroups,
            TrafficIpGroupRow::project,
        )
        .await
    }
}
