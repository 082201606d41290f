//! Snowflake connection configuration.

use dialect_core::{
    optional_string, optional_u64, require_string, BaseConnectionConfig, ConnectionConfig,
    RawConfig, ValidationError,
};

const DEFAULT_PORT: u16 = 443;

/// Snowflake connection configuration.
///
/// On top of the shared fields, Snowflake requires an `account` and
/// optionally takes `warehouse`, `role` and a session `duration`; the
/// optional parameters appear in the connection URL only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct SnowflakeConnectionConfig {
    pub base: BaseConnectionConfig,
    pub account: String,
    pub warehouse: Option<String>,
    pub role: Option<String>,
    pub duration: Option<u64>,
}

impl SnowflakeConnectionConfig {
    /// Validate a raw config block, reporting every missing or malformed
    /// field at once.
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        let base = BaseConnectionConfig::from_raw(crate::SCHEME, DEFAULT_PORT, raw, &mut missing);
        let account = require_string(raw, "account", &mut missing);
        let duration = optional_u64(raw, "duration", &mut missing);
        if !missing.is_empty() {
            return Err(ValidationError { fields: missing });
        }

        Ok(Self {
            base,
            account,
            warehouse: optional_string(raw, "warehouse"),
            role: optional_string(raw, "role"),
            duration,
        })
    }
}

impl ConnectionConfig for SnowflakeConnectionConfig {
    fn base(&self) -> &BaseConnectionConfig {
        &self.base
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("account", self.account.clone()),
            ("warehouse", self.warehouse.clone().unwrap_or_default()),
            ("role", self.role.clone().unwrap_or_default()),
            (
                "duration",
                self.duration.map(|d| d.to_string()).unwrap_or_default(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawConfig {
        serde_json::json!({
            "username": "u",
            "password": "p",
            "host": "h",
            "database": "db",
            "account": "acct1",
            "role": "admin",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_connection_url_preserves_declared_param_order() {
        let config = SnowflakeConnectionConfig::from_raw(&valid_raw()).unwrap();
        // warehouse and duration are unset, so they are omitted entirely
        assert_eq!(
            config.build_connection_url(),
            "snowflake://u:p@h:443/db?account=acct1&role=admin"
        );
    }

    #[test]
    fn test_connection_url_with_all_params() {
        let mut raw = valid_raw();
        raw.insert("warehouse".to_string(), serde_json::json!("compute_wh"));
        raw.insert("duration".to_string(), serde_json::json!(3600));
        let config = SnowflakeConnectionConfig::from_raw(&raw).unwrap();
        assert_eq!(
            config.build_connection_url(),
            "snowflake://u:p@h:443/db?account=acct1&warehouse=compute_wh&role=admin&duration=3600"
        );
    }

    #[test]
    fn test_missing_account_is_reported_by_name() {
        let mut raw = valid_raw();
        raw.remove("account");
        let err = SnowflakeConnectionConfig::from_raw(&raw).unwrap_err();
        assert_eq!(err.fields, vec!["account"]);
    }

    #[test]
    fn test_url_is_reproducible() {
        let a = SnowflakeConnectionConfig::from_raw(&valid_raw()).unwrap();
        let b = SnowflakeConnectionConfig::from_raw(&valid_raw()).unwrap();
        assert_eq!(a.build_connection_url(), b.build_connection_url());
    }
}
