//! Minimal GraphQL-over-HTTP client.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::documents::Operation;
use crate::config::BackendConfig;
use crate::error::DbError;

const UNAUTHORIZED_CODE: &str = "UNAUTHORIZED";

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default)]
    extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct ErrorExtensions {
    #[serde(default)]
    code: Option<String>,
}

impl GraphQlError {
    fn is_unauthorized(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.code.as_deref())
            == Some(UNAUTHORIZED_CODE)
    }
}

/// Pull `op.field` out of a parsed response.
///
/// A `null` or absent field is `Ok(None)`. Any reported error fails the
/// whole call, with `UNAUTHORIZED` taking precedence.
pub(crate) fn extract_field<T: DeserializeOwned>(
    op: &Operation,
    response: GraphQlResponse,
) -> Result<Option<T>, DbError> {
    if let Some(denied) = response.errors.iter().find(|e| e.is_unauthorized()) {
        return Err(DbError::Unauthorized(denied.message.clone()));
    }
    if !response.errors.is_empty() {
        let message = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(DbError::GraphQl {
            operation: op.name.to_string(),
            message,
        });
    }

    let Some(mut data) = response.data else {
        return Err(DbError::MissingData {
            operation: op.name.to_string(),
        });
    };
    match data.get_mut(op.field).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DbError::Decode {
                operation: op.name.to_string(),
                message: e.to_string(),
            }),
    }
}

/// Sends GraphQL operations to a single endpoint.
#[derive(Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    id_token: Option<String>,
}

impl fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("endpoint", &self.endpoint)
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GraphQlClient {
    pub fn new(config: &BackendConfig) -> Result<Self, DbError> {
        if config.graphql_endpoint.trim().is_empty() {
            return Err(DbError::Configuration(
                "remote backend requires a GraphQL endpoint".into(),
            ));
        }
        if config.id_token.is_none() {
            warn!("No ID token configured, requests are sent unauthenticated");
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.graphql_endpoint.clone(),
            id_token: config.id_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `op` with `variables` and decode its result field.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        op: &Operation,
        variables: Value,
    ) -> Result<Option<T>, DbError> {
        let body = serde_json::json!({
            "query": op.document,
            "operationName": op.name,
            "variables": variables,
        });

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.id_token {
            request = request.bearer_auth(token);
        }

        debug!(operation = op.name, "Sending GraphQL request");
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(DbError::Unauthorized(format!(
                "{} rejected with HTTP 401",
                op.name
            )));
        }

        let text = response.text().await?;
        let parsed: GraphQlResponse = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                DbError::Decode {
                    operation: op.name.to_string(),
                    message: e.to_string(),
                }
            } else {
                DbError::GraphQl {
                    operation: op.name.to_string(),
                    message: format!("HTTP {status}"),
                }
            }
        })?;

        let result = extract_field(op, parsed);
        if let Err(err) = &result {
            warn!(operation = op.name, error = %err, "GraphQL operation failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::documents::{GET_TENANT_BY_ID, UPDATE_TENANT_LINK};
    use fishdesk_core::models::tenant::Tenant;

    fn parse(json: &str) -> GraphQlResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn extracts_result_field() {
        let response = parse(
            r#"{"data": {"getTenantById": {
                "id": "t-1", "name": "山田水産", "address": null,
                "createdAt": 1700000000000, "updatedAt": null
            }}}"#,
        );
        let tenant: Tenant = extract_field(&GET_TENANT_BY_ID, response).unwrap().unwrap();
        assert_eq!(tenant.id, "t-1");
        assert_eq!(tenant.address, "");
        assert_eq!(tenant.created_at.unwrap().timestamp_millis(), 1_700_000_000_000);
        assert!(tenant.updated_at.is_none());
    }

    #[test]
    fn null_field_is_none() {
        let response = parse(r#"{"data": {"getTenantById": null}}"#);
        let tenant: Option<Tenant> = extract_field(&GET_TENANT_BY_ID, response).unwrap();
        assert!(tenant.is_none());
    }

    #[test]
    fn unauthorized_code_wins() {
        let response = parse(
            r#"{"errors": [
                {"message": "boom"},
                {"message": "token expired", "extensions": {"code": "UNAUTHORIZED"}}
            ]}"#,
        );
        let err = extract_field::<Tenant>(&GET_TENANT_BY_ID, response).unwrap_err();
        assert!(matches!(err, DbError::Unauthorized(msg) if msg == "token expired"));
    }

    #[test]
    fn other_errors_are_joined() {
        let response = parse(
            r#"{"data": null, "errors": [
                {"message": "a", "extensions": {"code": "BAD_INPUT"}},
                {"message": "b"}
            ]}"#,
        );
        let err = extract_field::<Tenant>(&UPDATE_TENANT_LINK, response).unwrap_err();
        match err {
            DbError::GraphQl { operation, message } => {
                assert_eq!(operation, "UpdateTenantLink");
                assert_eq!(message, "a; b");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_data_and_bad_shape() {
        let err = extract_field::<Tenant>(&GET_TENANT_BY_ID, parse("{}")).unwrap_err();
        assert!(matches!(err, DbError::MissingData { .. }));

        let response = parse(r#"{"data": {"getTenantById": {"id": 7}}}"#);
        let err = extract_field::<Tenant>(&GET_TENANT_BY_ID, response).unwrap_err();
        assert!(matches!(err, DbError::Decode { .. }));
    }

    #[test]
    fn rejects_empty_endpoint() {
        let err = GraphQlClient::new(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, DbError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let config = BackendConfig {
            graphql_endpoint: "http://localhost:4000/graphql".into(),
            id_token: Some("secret-token".into()),
            ..Default::default()
        };
        let client = GraphQlClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
