//! Content-fabric client for playout resolution
//!
//! The fabric is an external content network addressed by immutable version
//! hashes. Resolving a hash means discovering a fabric node from the network
//! configuration endpoint, then fetching the playout options document for
//! that version from the node.

use async_trait::async_trait;
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::debug;

use crate::models::playout::PlayoutOptions;

/// Error type for playout resolution failures.
///
/// The fabric does not let us reliably tell an unknown hash from a network
/// or authentication problem, so callers treat every variant as one failure
/// kind; the variants only carry diagnostics for the logs.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The fabric's network configuration document is unusable
    #[error("Fabric configuration error: {0}")]
    Configuration(String),

    /// The fabric endpoint could not be reached or the response was not
    /// a valid playout options document
    #[error("Fabric request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The fabric answered with a non-success status for this version hash
    #[error("Fabric rejected version hash {hash}: HTTP {status}")]
    Rejected { hash: String, status: u16 },
}

/// Remote service that turns a content version hash into playout options
#[async_trait]
pub trait PlayoutResolver: Send + Sync {
    async fn resolve(&self, version_hash: &str) -> Result<PlayoutOptions, ResolutionError>;
}

/// Fabric client configuration
#[derive(Debug, Clone)]
pub struct FabricConfig {
    /// Network configuration endpoint, used to discover fabric nodes
    pub config_url: String,
    /// Static bearer token presented to the fabric
    pub auth_token: String,
}

impl FabricConfig {
    /// Create a new FabricConfig from environment variables
    ///
    /// # Environment Variables
    /// - `FABRIC_CONFIG_URL`: network configuration endpoint
    /// - `FABRIC_AUTH_TOKEN`: bearer token for fabric requests
    pub fn from_env() -> Result<Self, String> {
        let config_url = env::var("FABRIC_CONFIG_URL")
            .map_err(|_| "FABRIC_CONFIG_URL environment variable not set".to_string())?;

        let auth_token = env::var("FABRIC_AUTH_TOKEN")
            .map_err(|_| "FABRIC_AUTH_TOKEN environment variable not set".to_string())?;

        Ok(FabricConfig {
            config_url,
            auth_token,
        })
    }
}

/// Network configuration document served by the fabric config endpoint
#[derive(Debug, Deserialize)]
struct FabricNetworkConfig {
    network: FabricNetwork,
}

#[derive(Debug, Deserialize)]
struct FabricNetwork {
    seed_nodes: FabricSeedNodes,
}

#[derive(Debug, Deserialize)]
struct FabricSeedNodes {
    fabric_api: Vec<String>,
}

/// HTTP client for the content fabric
#[derive(Clone)]
pub struct FabricResolver {
    client: reqwest::Client,
    config: FabricConfig,
}

impl FabricResolver {
    /// Create a new fabric resolver
    pub fn new(config: FabricConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Discover a fabric node from the network configuration endpoint
    async fn discover_node(&self) -> Result<String, ResolutionError> {
        let response = self
            .client
            .get(&self.config.config_url)
            .send()
            .await?
            .error_for_status()?;

        let network_config: FabricNetworkConfig = response.json().await?;

        let node = network_config
            .network
            .seed_nodes
            .fabric_api
            .into_iter()
            .next()
            .ok_or_else(|| {
                ResolutionError::Configuration(
                    "Network configuration lists no fabric nodes".to_string(),
                )
            })?;

        debug!("Using fabric node {}", node);
        Ok(node)
    }
}

#[async_trait]
impl PlayoutResolver for FabricResolver {
    async fn resolve(&self, version_hash: &str) -> Result<PlayoutOptions, ResolutionError> {
        let node = self.discover_node().await?;

        let url = format!(
            "{}/q/{}/rep/playout/default/options.json",
            node.trim_end_matches('/'),
            version_hash
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.auth_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolutionError::Rejected {
                hash: version_hash.to_string(),
                status: response.status().as_u16(),
            });
        }

        let options: PlayoutOptions = response.json().await?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_network_configuration() {
        let raw = serde_json::json!({
            "node_id": "inod2kJasd",
            "network": {
                "seed_nodes": {
                    "fabric_api": [
                        "https://host-154-14-240-131.contentfabric.io",
                        "https://host-154-14-240-132.contentfabric.io"
                    ],
                    "ethereum_api": ["https://host-154-14-240-131.contentfabric.io/eth"]
                }
            }
        });

        let config: FabricNetworkConfig = serde_json::from_value(raw).unwrap();
        assert_eq!(config.network.seed_nodes.fabric_api.len(), 2);
        assert!(config.network.seed_nodes.fabric_api[0].starts_with("https://"));
    }

    #[test]
    fn from_env_requires_both_variables() {
        unsafe {
            env::remove_var("FABRIC_CONFIG_URL");
            env::remove_var("FABRIC_AUTH_TOKEN");
        }

        let err = FabricConfig::from_env().unwrap_err();
        assert!(err.contains("FABRIC_CONFIG_URL"));
    }
}
