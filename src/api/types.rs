use serde::{Deserialize, Deserializer, Serialize};

use crate::query::ListQuery;

/// Query parameters for the listing endpoint.
///
/// `limit` and `page` parse leniently: a non-numeric value falls back to
/// its default instead of failing the request. Range clamping happens in
/// the query engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        ListQuery {
            query: self.query,
            serial: self.serial,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            limit: self.limit,
            page: self.page,
        }
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Response to a manual reload request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReloadResponse {
    pub fn success(count: usize) -> Self {
        Self {
            ok: true,
            count: Some(count),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            count: None,
            error: Some(error.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub parts: usize,
}

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
