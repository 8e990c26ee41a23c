use thiserror::Error;

/// Why the catalog has no data. Transport problems stay deliberately
/// unclassified; a malformed payload is its own kind so callers can tell a
/// flaky network from a server-side format change.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
