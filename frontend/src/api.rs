//! API gateway: the single chokepoint for resource-API network I/O.
//!
//! Every call carries the session's auth headers. Responses are classified
//! into exactly one failure kind: a 401 anywhere invalidates the persisted
//! session and surfaces [`ApiError::Unauthorized`]; any other non-2xx parses
//! the structured error body (`detail` or `error` field) into
//! [`ApiError::Api`]; transport failures become [`ApiError::Network`]. No
//! retries happen here: a failed call is reported immediately and retrying
//! is a user action on the calling view.

use futures::future::join_all;
use gloo_net::http::{Method, RequestBuilder, Response};
use serde_json::Value;
use thiserror::Error;

use common::model::page::Page;
use common::model::record::Record;
use common::model::reference::ReferenceItem;
use common::model::tenant::Tenant;

use crate::config::API_BASE_URL;
use crate::query::ListQuery;
use crate::session::{self, Session};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// 401 from any endpoint. The session is already invalidated when this
    /// surfaces; the view routes the user back to the login form.
    #[error("Authentication failed")]
    Unauthorized,

    /// Non-2xx response with the server's own message where one was present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, refused connection, aborted request).
    #[error("Network error: {0}")]
    Network(String),
}

pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// GET `/{entity}/` with page/search/filter parameters.
    pub async fn list(&self, entity: &str, query: &ListQuery) -> Result<Page<Record>, ApiError> {
        let pairs = query.pairs();
        let builder = self
            .builder(Method::GET, &entity_url(entity, None))
            .query(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        let response = self.send(builder, None).await?;
        json_body(response).await
    }

    /// GET `/{entity}/{id}/`.
    pub async fn get(&self, entity: &str, id: &str) -> Result<Record, ApiError> {
        let builder = self.builder(Method::GET, &entity_url(entity, Some(id)));
        let response = self.send(builder, None).await?;
        json_body(response).await
    }

    /// POST `/{entity}/`; returns the created row.
    pub async fn create(&self, entity: &str, data: &Value) -> Result<Record, ApiError> {
        let builder = self.builder(Method::POST, &entity_url(entity, None));
        let response = self.send(builder, Some(data)).await?;
        json_body(response).await
    }

    /// PUT `/{entity}/{id}/`; returns the updated row.
    pub async fn update(&self, entity: &str, id: &str, data: &Value) -> Result<Record, ApiError> {
        let builder = self.builder(Method::PUT, &entity_url(entity, Some(id)));
        let response = self.send(builder, Some(data)).await?;
        json_body(response).await
    }

    /// DELETE `/{entity}/{id}/`.
    pub async fn delete(&self, entity: &str, id: &str) -> Result<(), ApiError> {
        let builder = self.builder(Method::DELETE, &entity_url(entity, Some(id)));
        self.send(builder, None).await.map(|_| ())
    }

    /// Issues one DELETE per id concurrently and joins on all of them.
    /// Partial failure stays visible: the caller gets one outcome per id
    /// rather than a single aggregated error.
    pub async fn bulk_delete(
        &self,
        entity: &str,
        ids: &[String],
    ) -> Vec<(String, Result<(), ApiError>)> {
        let outcomes = join_all(ids.iter().map(|id| self.delete(entity, id))).await;
        ids.iter().cloned().zip(outcomes).collect()
    }

    /// GET `/{entity}/export/?format=csv&...` over the current search and
    /// filters; returns the raw CSV payload for the caller to save.
    pub async fn export(&self, entity: &str, query: &ListQuery) -> Result<String, ApiError> {
        let pairs = query.export_pairs();
        let builder = self
            .builder(Method::GET, &format!("{}/{}/export/", API_BASE_URL, entity))
            .query(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        let response = self.send(builder, None).await?;
        response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    /// Full `tenants` reference list (first page covers the handful there is).
    pub async fn tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        let builder = self.builder(Method::GET, &entity_url("tenants", None));
        let response = self.send(builder, None).await?;
        json_body::<Page<Tenant>>(response).await.map(|page| page.results)
    }

    /// Read-only reference list such as `referral-types` or `referral-status`.
    pub async fn reference_list(&self, slug: &str) -> Result<Vec<ReferenceItem>, ApiError> {
        let builder = self.builder(Method::GET, &entity_url(slug, None));
        let response = self.send(builder, None).await?;
        json_body::<Page<ReferenceItem>>(response)
            .await
            .map(|page| page.results)
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = RequestBuilder::new(url).method(method);
        for (name, value) in self.session.auth_headers() {
            builder = builder.header(&name, &value);
        }
        builder
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let request = match body {
            Some(json) => builder.json(json),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Network(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if response.status() == 401 {
            session::clear_storage();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status,
                message: error_message(status, &body),
            });
        }
        Ok(response)
    }
}

fn entity_url(entity: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{}/{}/{}/", API_BASE_URL, entity, id),
        None => format!("{}/{}/", API_BASE_URL, entity),
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

/// Message for a non-2xx response: the `detail` or `error` field of a JSON
/// error body, falling back to the bare status code when the body is not
/// parseable JSON (or carries neither field).
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "error"].iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail_field() {
        let body = r#"{"detail": "Not found.", "error": "other"}"#;
        assert_eq!(error_message(404, body), "Not found.");
    }

    #[test]
    fn error_message_falls_back_to_error_field() {
        let body = r#"{"error": "tenant is read-only"}"#;
        assert_eq!(error_message(400, body), "tenant is read-only");
    }

    #[test]
    fn unparseable_body_falls_back_to_status_text() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP error! status: 502");
        assert_eq!(error_message(500, r#"{"message": "nope"}"#), "HTTP error! status: 500");
    }

    #[test]
    fn entity_urls_keep_trailing_slash() {
        assert_eq!(
            entity_url("patients", None),
            format!("{}/patients/", API_BASE_URL)
        );
        assert_eq!(
            entity_url("patients", Some("17")),
            format!("{}/patients/17/", API_BASE_URL)
        );
    }
}
