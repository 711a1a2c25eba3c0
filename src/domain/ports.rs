use crate::domain::model::Facility;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the raw facility list. The production implementation talks to
/// the facilities API over HTTP; tests substitute a mock.
#[async_trait]
pub trait FacilitySource: Send + Sync {
    async fn fetch_facilities(&self) -> Result<Vec<Facility>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
    fn page_size(&self) -> usize;
}
