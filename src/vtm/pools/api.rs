//! Pool API operations

use crate::error::Result;
use crate::vtm::{ResourceType, VtmClient};

use super::models::{PoolBasic, PoolRow};

impl VtmClient {
    /// Fetch every pool and project it into a row
    pub async fn get_pool_rows(&self) -> Result<Vec<PoolRow>> {
        self.fetch_projected::<PoolBasic, _, _>(ResourceType::Pools, PoolRow::project)
            .await
    }
}
