//! Candidate probe backed by HTTP and the local filesystem.
//!
//! A candidate counts as loaded only if its bytes decode as an image, so a
//! 200 response carrying an HTML error page still advances the cursor.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::domain::entities::{AssetHandle, CandidateSource};
use crate::domain::errors::ProbeError;
use crate::domain::ports::ImageProbePort;
use crate::infrastructure::config::ProbeConfig;

/// Loads candidates the way the display layer would.
#[derive(Debug, Clone)]
pub struct ImageProbe {
    http_client: reqwest::Client,
    max_body_bytes: u64,
}

impl ImageProbe {
    /// Creates a probe with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    async fn probe_remote(&self, url: &str) -> Result<(), ProbeError> {
        let mut response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            check_body_size(url, length, self.max_body_bytes)?;
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ProbeError::network(url, e.to_string()))?
        {
            body.extend_from_slice(&chunk);
            check_body_size(url, body.len() as u64, self.max_body_bytes)?;
        }
        let bytes = body.freeze();
        trace!(url, size = bytes.len(), "Downloaded photo candidate");

        decode(url, bytes).await
    }

    async fn probe_local(asset: &AssetHandle) -> Result<(), ProbeError> {
        let location = asset.public_path();
        let bytes = read_asset(asset.source())
            .await
            .map_err(|e| ProbeError::io(location, e.to_string()))?;

        decode(location, bytes).await
    }
}

#[async_trait]
impl ImageProbePort for ImageProbe {
    async fn probe(&self, candidate: &CandidateSource) -> Result<(), ProbeError> {
        debug!(location = %candidate, tier = %candidate.tier(), "Probing photo candidate");
        match candidate {
            CandidateSource::Remote { url } => self.probe_remote(url).await,
            CandidateSource::Local { asset } => Self::probe_local(asset).await,
        }
    }
}

/// Rejects bodies larger than `limit`.
fn check_body_size(location: &str, length: u64, limit: u64) -> Result<(), ProbeError> {
    if length > limit {
        return Err(ProbeError::TooLarge {
            location: location.to_string(),
            limit,
        });
    }
    Ok(())
}

async fn read_asset(path: &Path) -> std::io::Result<Bytes> {
    tokio::fs::read(path).await.map(Bytes::from)
}

async fn decode(location: &str, bytes: Bytes) -> Result<(), ProbeError> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes).map(|_| ()))
        .await
        .map_err(|e| ProbeError::decode(location, format!("decode task panicked: {e}")))?
        .map_err(|e| ProbeError::decode(location, e.to_string()))
}
