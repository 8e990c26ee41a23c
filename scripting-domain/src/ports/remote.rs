use async_trait::async_trait;

use crate::error::CatalogError;
use crate::value_objects::ResourceKind;

/// The remote catalog endpoint. One logical GET per call; the whole decoded
/// response body comes back as text. Implementations report every
/// transport-level problem as `Unavailable`; callers cannot tell a dead
/// network from a bad stream, and retry by simply calling again.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, resource: ResourceKind) -> Result<String, CatalogError>;
}
