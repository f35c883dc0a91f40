//! reqwest-backed catalog client

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::types::SearchResponseBody;
use super::{ApiError, BookPage, CatalogApi, Dictionaries, SearchQuery};
use crate::config::ApiConfig;
use crate::field::FieldKind;

/// Catalog client speaking the backend's JSON-over-HTTP API
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalog {
    /// Build a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config
                .token
                .as_ref()
                .filter(|t| !t.trim().is_empty())
                .cloned(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch_suggestions(
        &self,
        kind: FieldKind,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, ApiError> {
        let request = self
            .get(&format!("/books/autocomplete/{}", kind.endpoint_segment()))
            .query(&[("query", query.trim().to_string()), ("size", limit.to_string())]);
        decode(send(request).await?).await
    }

    async fn fetch_books(&self, query: &SearchQuery) -> Result<BookPage, ApiError> {
        let request = self.get("/books/search").query(&query.params());
        let body: SearchResponseBody = decode(send(request).await?).await?;
        Ok(body.into())
    }

    async fn fetch_dictionaries(&self) -> Result<Dictionaries, ApiError> {
        decode(send(self.get("/dictionaries/")).await?).await
    }
}

impl CatalogApi for HttpCatalog {
    fn suggest<'a>(
        &'a self,
        kind: FieldKind,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(self.fetch_suggestions(kind, query, limit))
    }

    fn search_books<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<BookPage, ApiError>> {
        Box::pin(self.fetch_books(query))
    }

    fn dictionaries(&self) -> BoxFuture<'_, Result<Dictionaries, ApiError>> {
        Box::pin(self.fetch_dictionaries())
    }
}

/// Send a request, mapping transport failures and non-2xx statuses
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        return Err(ApiError::Api {
            code: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
