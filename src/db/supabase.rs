// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase REST client with typed per-operation requests.
//!
//! Every store operation issues exactly one round trip: no retries, no
//! caching, no batching. Failures carry the backend's message verbatim so
//! the store can surface it unmodified.

use crate::config::Config;
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `Accept` value asking the backend for exactly one JSON object instead
/// of an array (PostgREST's single-row contract).
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Equality predicate on a single column.
///
/// Equality is the only comparison the store needs; the query types stay
/// closed over it.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Render as a query pair, e.g. `("cohort", "eq.AY 2024-25")`.
    fn to_param(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

/// A typed read request: column selection, equality filters, ordering.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    columns: String,
    filters: Vec<Filter>,
    order: Option<String>,
}

impl SelectQuery {
    /// Select all columns, no filters, backend ordering.
    pub fn new() -> Self {
        Self {
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Restrict the returned columns.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Add an equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    /// Sort ascending by a column.
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.order = Some(column.into());
        self
    }

    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];
        for filter in &self.filters {
            params.push(filter.to_param());
        }
        if let Some(column) = &self.order {
            params.push(("order".to_string(), format!("{}.asc", column)));
        }
        params
    }
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Supabase database client.
#[derive(Clone)]
pub struct SupabaseDb {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseDb {
    /// Create a client for the configured project.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/rest/v1", config.supabase_url.trim_end_matches('/')),
            api_key: config.supabase_key.clone(),
        }
    }

    /// Fetch the rows matching a query.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<T>> {
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Insert a single row and return the stored representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize>(&self, table: &str, row: &B) -> Result<T> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Apply a partial update to the rows matching `filters` and return the
    /// merged row. The backend reports a missing row as an error under the
    /// single-object contract.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        filters: &[Filter],
        changes: &B,
    ) -> Result<T> {
        if filters.is_empty() {
            return Err(AppError::Validation(
                "refusing unfiltered update".to_string(),
            ));
        }

        let params: Vec<_> = filters.iter().map(Filter::to_param).collect();
        let response = self
            .http
            .patch(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(&params)
            .json(changes)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Delete the rows matching `filters`.
    ///
    /// The backend decides whether deleting zero rows is an error (it is
    /// not, under the REST contract).
    pub async fn delete(&self, table: &str, filters: &[Filter]) -> Result<()> {
        if filters.is_empty() {
            return Err(AppError::Validation(
                "refusing unfiltered delete".to_string(),
            ));
        }

        let params: Vec<_> = filters.iter().map(Filter::to_param).collect();
        let response = self
            .http
            .delete(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        Self::check_response(response).await
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    /// Check response status and return an error if not successful.
    async fn check_response(response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::response_error(response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
    }

    /// Extract the message from a failed response.
    ///
    /// The backend reports errors as `{"message": "..."}`; fall back to the
    /// raw body, or the status line when the body is empty.
    async fn response_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body
                }
            });

        AppError::Backend(message)
    }
}

/// Error body returned by the backend.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}
