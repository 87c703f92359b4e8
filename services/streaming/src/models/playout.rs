//! Playout options returned by the content fabric
//!
//! The fabric describes how an asset version can be delivered as a nested
//! structure keyed by protocol ("hls", "dash", ...), each protocol carrying a
//! set of named playout methods ("clear", "widevine", ...) with their URLs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full playout options document for one content version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayoutOptions {
    #[serde(flatten)]
    pub protocols: HashMap<String, ProtocolOptions>,
}

/// Playout methods available for a single delivery protocol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolOptions {
    #[serde(rename = "playoutMethods", default)]
    pub playout_methods: HashMap<String, PlayoutMethod>,
}

/// One named delivery method within a protocol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayoutMethod {
    #[serde(rename = "playoutUrl")]
    pub playout_url: Option<String>,
    #[serde(rename = "drms", default, skip_serializing_if = "Option::is_none")]
    pub drms: Option<serde_json::Value>,
}

impl PlayoutOptions {
    /// Look up the clear (unencrypted) playout URL for a protocol.
    ///
    /// Returns `None` when the protocol, the "clear" method, or its URL is
    /// absent. A missing path is an empty result, not a malformed document.
    pub fn clear_playout_url(&self, protocol: &str) -> Option<&str> {
        self.protocols
            .get(protocol)?
            .playout_methods
            .get("clear")?
            .playout_url
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_fabric_options_document() {
        let raw = serde_json::json!({
            "hls": {
                "playoutMethods": {
                    "clear": { "playoutUrl": "https://host/qlibs/x/playlist.m3u8" },
                    "widevine": {
                        "playoutUrl": "https://host/qlibs/x/playlist-wv.m3u8",
                        "drms": { "widevine": { "licenseServers": [] } }
                    }
                }
            },
            "dash": {
                "playoutMethods": {
                    "widevine": { "playoutUrl": "https://host/qlibs/x/manifest.mpd" }
                }
            }
        });

        let options: PlayoutOptions = serde_json::from_value(raw).unwrap();
        assert_eq!(
            options.clear_playout_url("hls"),
            Some("https://host/qlibs/x/playlist.m3u8")
        );
        assert_eq!(options.clear_playout_url("dash"), None);
    }

    #[test]
    fn missing_protocol_yields_none() {
        let options = PlayoutOptions::default();
        assert_eq!(options.clear_playout_url("hls"), None);
    }

    #[test]
    fn method_without_url_yields_none() {
        let raw = serde_json::json!({
            "hls": { "playoutMethods": { "clear": {} } }
        });
        let options: PlayoutOptions = serde_json::from_value(raw).unwrap();
        assert_eq!(options.clear_playout_url("hls"), None);
    }
}
