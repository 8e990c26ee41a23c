use std::io::Read;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use reqwest::header::{ACCEPT_ENCODING, CONTENT_ENCODING};
use reqwest::Client;
use tracing::debug;

use scripting_domain::ports::CatalogFetcher;
use scripting_domain::{CatalogError, ResourceKind, RuntimeConfig};

/// HTTP client for the remote catalog API. One GET per call against
/// `{base_url}{segment}.json`; transport compression is negotiated with the
/// server and decoded here. There is no retry: that belongs to the catalog
/// cache, which simply fetches again on the next access.
pub struct HttpCatalogFetcher {
    client: Client,
    base_url: String,
}

impl HttpCatalogFetcher {
    pub fn new(config: &RuntimeConfig) -> anyhow::Result<Self> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.request_timeout_seconds.max(3)));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    fn resource_url(&self, resource: ResourceKind) -> String {
        format!("{}{}.json", self.base_url, resource.path_segment())
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch(&self, resource: ResourceKind) -> Result<String, CatalogError> {
        let url = self.resource_url(resource);
        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| CatalogError::Unavailable(anyhow!(err)))?;

        let encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_ascii_lowercase());
        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogError::Unavailable(anyhow!(err)))?;

        decode_body(encoding.as_deref(), &body)
    }
}

/// Decodes a response body according to its Content-Encoding. Anything that
/// fails to decompress or is not UTF-8 counts as "no data".
fn decode_body(encoding: Option<&str>, body: &[u8]) -> Result<String, CatalogError> {
    match encoding {
        Some("gzip") => {
            let mut out = String::new();
            GzDecoder::new(body)
                .read_to_string(&mut out)
                .map_err(|err| CatalogError::Unavailable(anyhow!(err)))?;
            Ok(out)
        }
        Some("deflate") => {
            // Servers disagree on whether "deflate" means zlib-wrapped or
            // raw; accept both.
            let mut out = String::new();
            if ZlibDecoder::new(body).read_to_string(&mut out).is_ok() {
                return Ok(out);
            }
            out.clear();
            DeflateDecoder::new(body)
                .read_to_string(&mut out)
                .map_err(|err| CatalogError::Unavailable(anyhow!(err)))?;
            Ok(out)
        }
        _ => String::from_utf8(body.to_vec())
            .map_err(|err| CatalogError::Unavailable(anyhow!(err))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
    use flate2::Compression;

    use super::*;

    const BODY: &str = r#"[{"id":1,"name":"Hat","slot":"Head"}]"#;

    fn gzip(data: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data.as_bytes()).expect("write");
        encoder.finish().expect("finish")
    }

    #[test]
    fn plain_bodies_pass_through() {
        assert_eq!(decode_body(None, BODY.as_bytes()).expect("decode"), BODY);
        assert_eq!(
            decode_body(Some("identity"), BODY.as_bytes()).expect("decode"),
            BODY
        );
    }

    #[test]
    fn gzip_bodies_are_decompressed() {
        assert_eq!(decode_body(Some("gzip"), &gzip(BODY)).expect("decode"), BODY);
    }

    #[test]
    fn deflate_accepts_zlib_and_raw_streams() {
        let mut zlib = ZlibEncoder::new(Vec::new(), Compression::default());
        zlib.write_all(BODY.as_bytes()).expect("write");
        let zlib = zlib.finish().expect("finish");
        assert_eq!(decode_body(Some("deflate"), &zlib).expect("decode"), BODY);

        let mut raw = DeflateEncoder::new(Vec::new(), Compression::default());
        raw.write_all(BODY.as_bytes()).expect("write");
        let raw = raw.finish().expect("finish");
        assert_eq!(decode_body(Some("deflate"), &raw).expect("decode"), BODY);
    }

    #[test]
    fn truncated_gzip_is_unavailable() {
        let mut compressed = gzip(BODY);
        compressed.truncate(compressed.len() / 2);
        let err = decode_body(Some("gzip"), &compressed).expect_err("truncated");
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[test]
    fn non_utf8_plain_body_is_unavailable() {
        let err = decode_body(None, &[0xff, 0xfe, 0x00]).expect_err("bad utf8");
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[test]
    fn resource_urls_join_base_segment_and_extension() {
        let fetcher = HttpCatalogFetcher::new(&RuntimeConfig::default()).expect("client");
        assert_eq!(
            fetcher.resource_url(ResourceKind::Items),
            "https://api.saryion.com/aq3d/items.json"
        );
    }
}
