//! Vault API response payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Generic logical response returned by reads and lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    pub request_id: String,
    pub lease_id: String,
    pub lease_duration: u64,
    pub renewable: bool,
    /// Vault sends `null` for operations without a payload
    #[serde(deserialize_with = "null_as_default")]
    pub data: Map<String, Value>,
    pub warnings: Option<Vec<String>>,
}

impl Secret {
    /// Keys returned by a list operation.
    ///
    /// Non-string entries are skipped; a response without `data.keys`
    /// yields an empty list.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data
            .get("keys")
            .and_then(Value::as_array)
            .map(|keys| {
                keys.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `sys/health` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub initialized: bool,
    pub sealed: bool,
    pub standby: bool,
    pub version: String,
    pub cluster_name: Option<String>,
    pub cluster_id: Option<String>,
    pub server_time_utc: u64,
}

/// Error body, `{"errors": [...]}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_missing_fields_default() {
        let secret: Secret =
            serde_json::from_value(json!({ "data": { "password": "x" } })).unwrap();
        assert_eq!(secret.lease_duration, 0);
        assert!(!secret.renewable);
        assert_eq!(secret.data.get("password"), Some(&json!("x")));
        assert!(secret.warnings.is_none());
    }

    #[test]
    fn test_secret_null_data() {
        let body = json!({ "request_id": "r1", "data": null, "warnings": null });
        let secret: Secret = serde_json::from_value(body).unwrap();
        assert_eq!(secret.request_id, "r1");
        assert!(secret.data.is_empty());
    }

    #[test]
    fn test_list_keys() {
        let secret: Secret =
            serde_json::from_value(json!({ "data": { "keys": ["app/", "db", 7] } })).unwrap();
        assert_eq!(secret.keys(), vec!["app/".to_string(), "db".to_string()]);
        assert!(Secret::default().keys().is_empty());
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse = serde_json::from_value(json!({
            "initialized": true,
            "sealed": false,
            "standby": false,
            "version": "1.15.2",
            "cluster_name": "vault-cluster-1",
            "server_time_utc": 1_700_000_000u64
        }))
        .unwrap();
        assert!(health.initialized);
        assert_eq!(health.version, "1.15.2");
        assert_eq!(health.cluster_name.as_deref(), Some("vault-cluster-1"));
        assert!(health.cluster_id.is_none());
    }
}
