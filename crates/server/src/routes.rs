//! `GET /scrape`.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use pressbody_core::{ErrorKind, scrape};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeParams {
    pub source_name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub content: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolves the publisher, fetches the page and returns its body text.
///
/// A query string that fails to deserialize is treated like missing parameters.
pub async fn scrape_handler(
    State(state): State<AppState>, params: Result<Query<ScrapeParams>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable query string");
            ScrapeParams::default()
        }
    };

    let (Some(source_name), Some(url)) = (non_empty(params.source_name), non_empty(params.url)) else {
        return Err(ApiError::MissingParams);
    };

    match scrape(&state.fetcher, &source_name, &url).await {
        Ok(article) => {
            info!(source_name = %source_name, publisher = article.publisher, length = article.length(), "scrape ok");
            Ok(Json(ScrapeResponse { content: article.content }))
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::UnsupportedPublisher => {
                    warn!(source_name = %source_name, url = %url, "unsupported publisher")
                }
                ErrorKind::NotFound => warn!(source_name = %source_name, url = %url, "no body text found"),
                ErrorKind::InvalidInput | ErrorKind::Upstream => {
                    error!(source_name = %source_name, url = %url, error = %e, "scrape failed")
                }
            }
            Err(ApiError::from(&e))
        }
    }
}
