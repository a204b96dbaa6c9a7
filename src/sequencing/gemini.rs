//! Gemini-backed sequencing client.
//!
//! Direct HTTP integration with the Gemini generateContent API: JSON
//! response mode, bounded retry with exponential backoff on rate limits
//! and server errors, and session caching of sequenced profiles. The
//! client is constructed explicitly and passed where it is needed; its
//! lifecycle belongs to the process entry point, not to a lazily
//! initialized global.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use async_trait::async_trait;

use crate::dna::catalog;
use crate::dna::profile::TraitProfile;
use crate::graph::{InfluenceKind, NodeTier};

use super::cache::SessionCache;
use super::{Sequencer, SequencingError};

/// Default model for all sequencing calls.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Cache key schema version. Bump when the prompt or profile shape
/// changes so stale session entries stop matching.
const CACHE_SCHEMA: &str = "dna/v4";

const MAX_RETRIES: u32 = 2;

/// Which way a lineage discovery looks from the anchor artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineageDirection {
    /// Major influences on the artist (ancestors).
    Root,
    /// Artists heavily influenced by the artist (descendants).
    Branch,
}

/// Metadata for a newly discovered artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredDetails {
    pub group: u8,
    pub color: String,
    pub title: String,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<NodeTier>,
}

/// The connection accompanying a discovered artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence_type: Option<InfluenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence_context: Option<String>,
    pub width: u8,
}

/// One artist found by a lineage discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageResult {
    pub name: String,
    pub is_new: bool,
    /// Present only when `is_new` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DiscoveredDetails>,
    pub connection: DiscoveredConnection,
}

/// The full lineage discovery payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageDiscovery {
    pub results: Vec<LineageResult>,
}

/// Which way a suggested connection points relative to the new artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionDirection {
    /// The existing artist influenced the new one.
    From,
    /// The new artist influenced the existing one.
    To,
}

/// A suggested connection for a newly analyzed artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedConnection {
    pub target: String,
    pub direction: ConnectionDirection,
    pub width: u8,
}

/// Graph placement for an artist the user wants to add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandAnalysis {
    pub group: u8,
    pub color: String,
    pub title: String,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<NodeTier>,
    #[serde(default)]
    pub connections: Vec<SuggestedConnection>,
}

/// Gemini sequencing client.
///
/// # Example
///
/// ```ignore
/// let sequencer = GeminiSequencer::new(api_key);
/// let profile = sequencer.sequence("Queen").await?;
/// ```
#[derive(Debug, Clone)]
pub struct GeminiSequencer {
    model: String,
    api_key: Option<String>,
    cache: SessionCache,
}

impl GeminiSequencer {
    /// Create a client with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a client with an explicit model name.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: Some(api_key.into()),
            cache: SessionCache::new(),
        }
    }

    /// Create a client from the GOOGLE_API_KEY or GEMINI_API_KEY
    /// environment variable. The key may be absent; calls will then fail
    /// with [`SequencingError::MissingApiKey`].
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok());
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key,
            cache: SessionCache::new(),
        }
    }

    /// The session cache backing this client.
    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }

    fn cache_key(label: &str) -> String {
        format!("{}/{}", CACHE_SCHEMA, label)
    }

    /// One line per layer, markers condensed, to keep the prompt small
    /// while still grounding the model in the exact marker vocabulary.
    fn condensed_catalog() -> String {
        catalog::layers()
            .iter()
            .map(|layer| {
                let markers = layer
                    .markers
                    .iter()
                    .map(|mk| format!("{}=\"{}\"", mk.id, mk.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} ({}): {}", layer.id, layer.name, markers)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sequencing_prompt(label: &str) -> String {
        format!(
            "Analyze the musical style of the artist: \"{label}\".\n\n\
             Using the specific DNA markers defined below, identify the top 2-4 \
             most characteristic markers for EACH layer that define this artist's sound.\n\n\
             For each marker, assign a dominance value from 1 to 5:\n\
             1 = subtle / occasional\n\
             3 = regular / noticeable\n\
             5 = defining characteristic / dominant\n\n\
             DNA definitions:\n{catalog}\n\n\
             Return a JSON object where keys are layer ids (e.g. \"L1\", \"L2\") and \
             values are arrays of objects, e.g.\n\
             {{\"L1\": [{{\"id\": \"R1\", \"value\": 5}}, {{\"id\": \"R19\", \"value\": 3}}]}}\n\n\
             Only return markers that apply (value >= 1).",
            label = label,
            catalog = Self::condensed_catalog(),
        )
    }

    fn lineage_prompt(label: &str, direction: LineageDirection, existing: &[String]) -> String {
        let ask = match direction {
            LineageDirection::Root => format!(
                "Find 3 distinct artists that are major INFLUENCES (roots/ancestors) on \"{}\".",
                label
            ),
            LineageDirection::Branch => format!(
                "Find 3 distinct artists that were heavily INFLUENCED BY (branches/descendants) \"{}\".",
                label
            ),
        };
        format!(
            "I am building a music genealogy graph.\n{ask}\n\n\
             Existing nodes in the graph: {existing}.\n\n\
             For EACH found artist, return a JSON object in a list.\n\n\
             If the artist ALREADY EXISTS in the existing nodes list above, use strict \
             name matching and return just the name and the connection details.\n\
             If the artist is NEW, also provide full metadata: \"group\" (0=ancestors, \
             1=60s roots, 2=70s southern/heartland, 3=prog, 4=metal, 5=thrash, 6=modern, \
             7=cross-genre), \"color\" (hex), \"title\" (\"Origin | Decade | Genre | Short \
             3-word vibe\"), \"size\" (20-40), and \"tier\" (\"root\" or \"branch\" to match \
             the search direction).\n\n\
             Return format:\n\
             {{\"results\": [{{\"name\": \"Artist\", \"isNew\": true, \"details\": {{...}}, \
             \"connection\": {{\"influenceType\": \"direct\" | \"stylistic\" | \"compositional\" \
             | \"member\" | \"cover\", \"influenceContext\": \"short description\", \
             \"width\": 3}}}}]}}\n\n\
             Return ONLY raw JSON.",
            ask = ask,
            existing = serde_json::to_string(existing).unwrap_or_default(),
        )
    }

    fn analysis_prompt(label: &str, existing: &[String]) -> String {
        format!(
            "I am building a force-directed graph of rock and metal history. The user \
             wants to add the artist: \"{label}\".\n\n\
             Existing nodes in the graph: {existing}.\n\n\
             Provide a JSON object with: \"group\" (0=ancestors, 1=60s roots, 2=70s \
             southern/heartland, 3=prog, 4=metal, 5=thrash, 6=modern, 7=cross-genre), \
             \"color\" (hex string), \"title\" (\"Origin | Decade | Genre | Short 3-word \
             vibe\"), \"size\" (impact score 20-40), \"tier\" (\"core\"), and \"connections\": \
             up to 3 objects {{\"target\": \"exact name from the existing list\", \
             \"direction\": \"from\" or \"to\", \"width\": 1-5}}. \"to\" means the new artist \
             influenced the existing node, \"from\" means the existing node influenced the \
             new artist. Only connect to nodes in the provided list.\n\n\
             Return ONLY raw JSON.",
            label = label,
            existing = serde_json::to_string(existing).unwrap_or_default(),
        )
    }

    /// POST a prompt in JSON-response mode and return the parsed JSON
    /// payload. Retries rate limits and server errors with exponential
    /// backoff; client errors are returned immediately.
    async fn generate_json(&self, prompt: &str) -> Result<Value, SequencingError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SequencingError::MissingApiKey)?;

        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;
        let endpoint = self.endpoint();

        let mut last_error: Option<SequencingError> = None;
        let mut retry_delay = std::time::Duration::from_secs(1);

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                log::warn!("sequencing retry attempt {} after {:?}", attempt, retry_delay);
                tokio::time::sleep(retry_delay).await;
                retry_delay *= 2;
            }

            let response = match client
                .post(&endpoint)
                .header("content-type", "application/json")
                .query(&[("key", api_key)])
                .json(&body)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = Some(SequencingError::Transport(e));
                    continue;
                }
            };

            let status = response.status();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                last_error = Some(SequencingError::Unavailable(format!(
                    "status {}",
                    status
                )));
                continue;
            }

            let text = response.text().await?;
            if status.is_client_error() {
                return Err(SequencingError::Service {
                    status: status.as_u16(),
                    message: text,
                });
            }

            let parsed: Value = serde_json::from_str(&text).map_err(|e| {
                SequencingError::MalformedResponse(format!("invalid response body: {}", e))
            })?;
            if let Some(error) = parsed.get("error") {
                let message = error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown service error");
                return Err(SequencingError::Service {
                    status: status.as_u16(),
                    message: message.to_string(),
                });
            }

            return extract_json_payload(&parsed);
        }

        Err(last_error
            .unwrap_or_else(|| SequencingError::Unavailable("no attempts made".to_string())))
    }

    /// Discover ancestors or descendants of an artist.
    pub async fn explore_lineage(
        &self,
        label: &str,
        direction: LineageDirection,
        existing: &[String],
    ) -> Result<LineageDiscovery, SequencingError> {
        let prompt = Self::lineage_prompt(label, direction, existing);
        let payload = self.generate_json(&prompt).await?;
        serde_json::from_value(payload)
            .map_err(|e| SequencingError::MalformedResponse(format!("lineage payload: {}", e)))
    }

    /// Analyze an artist the user wants to add: placement metadata plus
    /// suggested connections into the existing graph.
    pub async fn analyze_band(
        &self,
        label: &str,
        existing: &[String],
    ) -> Result<BandAnalysis, SequencingError> {
        let prompt = Self::analysis_prompt(label, existing);
        let payload = self.generate_json(&prompt).await?;
        serde_json::from_value(payload)
            .map_err(|e| SequencingError::MalformedResponse(format!("analysis payload: {}", e)))
    }
}

#[async_trait]
impl Sequencer for GeminiSequencer {
    async fn sequence(&self, label: &str) -> Result<TraitProfile, SequencingError> {
        let key = Self::cache_key(label);
        if let Some(cached) = self.cache.get(&key) {
            log::debug!("sequencing cache hit for {}", label);
            return profile_from_payload(cached);
        }

        let payload = self.generate_json(&Self::sequencing_prompt(label)).await?;
        let profile = profile_from_payload(payload.clone())?;
        self.cache.put(&key, payload);
        Ok(profile)
    }
}

/// Concatenated text of the first candidate, parsed as JSON.
fn extract_json_payload(response: &Value) -> Result<Value, SequencingError> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            SequencingError::MalformedResponse("no candidate content in response".to_string())
        })?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.is_empty() {
        return Err(SequencingError::MalformedResponse(
            "empty candidate text".to_string(),
        ));
    }
    serde_json::from_str(&text)
        .map_err(|e| SequencingError::MalformedResponse(format!("candidate text: {}", e)))
}

/// Parse a profile payload (`{"L1": [{"id": "R1", "value": 5}]}`) into a
/// normalized [`TraitProfile`].
fn profile_from_payload(payload: Value) -> Result<TraitProfile, SequencingError> {
    if !payload.is_object() {
        return Err(SequencingError::MalformedResponse(
            "profile payload is not an object".to_string(),
        ));
    }
    let mut profile: TraitProfile = serde_json::from_value(payload)
        .map_err(|e| SequencingError::MalformedResponse(format!("profile payload: {}", e)))?;
    profile.normalize();
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_model() {
        let client = GeminiSequencer::with_model("key", "gemini-2.0-flash-001");
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-001:generateContent"
        );
    }

    #[test]
    fn test_cache_key_is_versioned() {
        assert_eq!(GeminiSequencer::cache_key("Queen"), "dna/v4/Queen");
    }

    #[test]
    fn test_sequencing_prompt_carries_catalog_and_label() {
        let prompt = GeminiSequencer::sequencing_prompt("Queen");
        assert!(prompt.contains("\"Queen\""));
        assert!(prompt.contains("L3 (Harmonic Language)"));
        assert!(prompt.contains("H27=\"Tritone Interval\""));
    }

    #[test]
    fn test_extract_json_payload() {
        let response = serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "{\"L1\": [{\"id\"" },
                    { "text": ": \"R1\", \"value\": 5}]}" }
                ]}
            }]
        });
        let payload = extract_json_payload(&response).unwrap();
        assert_eq!(payload["L1"][0]["id"], "R1");
    }

    #[test]
    fn test_extract_json_payload_rejects_empty() {
        let response = serde_json::json!({ "candidates": [] });
        assert!(matches!(
            extract_json_payload(&response),
            Err(SequencingError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_profile_from_payload_normalizes() {
        let payload = serde_json::json!({
            "L1": [
                { "id": "R1", "value": 9 },
                { "id": "R19", "value": 0 }
            ]
        });
        let profile = profile_from_payload(payload).unwrap();
        assert_eq!(profile.intensity("R1"), 5); // clamped
        assert_eq!(profile.intensity("R19"), 0); // dropped
    }

    #[test]
    fn test_profile_from_payload_rejects_non_object() {
        let payload = serde_json::json!(["not", "a", "profile"]);
        assert!(matches!(
            profile_from_payload(payload),
            Err(SequencingError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_lineage_payload_deserializes() {
        let raw = serde_json::json!({
            "results": [
                {
                    "name": "Black Sabbath",
                    "isNew": false,
                    "connection": {
                        "influenceType": "stylistic",
                        "influenceContext": "Doom tempo blueprint.",
                        "width": 4
                    }
                },
                {
                    "name": "Candlemass",
                    "isNew": true,
                    "details": {
                        "group": 4,
                        "color": "#666666",
                        "title": "SWE | 1980s | Doom Metal | Epic Doom",
                        "size": 22,
                        "tier": "branch"
                    },
                    "connection": { "influenceType": "direct", "width": 3 }
                }
            ]
        });
        let discovery: LineageDiscovery = serde_json::from_value(raw).unwrap();
        assert_eq!(discovery.results.len(), 2);
        assert!(!discovery.results[0].is_new);
        assert!(discovery.results[1].details.is_some());
        assert_eq!(
            discovery.results[0].connection.influence_type,
            Some(InfluenceKind::Stylistic)
        );
    }

    #[test]
    fn test_analysis_payload_deserializes() {
        let raw = serde_json::json!({
            "group": 5,
            "color": "#4444ff",
            "title": "USA | 1980s | Thrash | Bay Area Speed",
            "size": 28,
            "tier": "core",
            "connections": [
                { "target": "Metallica", "direction": "from", "width": 4 }
            ]
        });
        let analysis: BandAnalysis = serde_json::from_value(raw).unwrap();
        assert_eq!(analysis.group, 5);
        assert_eq!(analysis.connections[0].direction, ConnectionDirection::From);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let client = GeminiSequencer {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            cache: SessionCache::new(),
        };
        assert!(matches!(
            client.sequence("Queen").await,
            Err(SequencingError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_remote_call() {
        // A client with no API key fails on any remote call, so a cached
        // label resolving successfully proves the cache short-circuits.
        let client = GeminiSequencer {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            cache: SessionCache::new(),
        };
        let payload = serde_json::json!({ "L3": [{ "id": "H17", "value": 5 }] });
        client
            .cache
            .put(&GeminiSequencer::cache_key("Queen"), payload);

        let profile = client.sequence("Queen").await.unwrap();
        assert_eq!(profile.intensity("H17"), 5);
        // Uncached labels still fail.
        assert!(client.sequence("Rush").await.is_err());
    }
}
