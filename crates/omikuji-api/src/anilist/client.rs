use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

use super::error::AniListError;
use super::types::{GraphQLResponse, MediaListCollection, MediaListCollectionResponse};
use crate::traits::ListSource;

pub const API_URL: &str = "https://graphql.anilist.co";

const USER_LIST_QUERY: &str = r#"
query ($username: String) {
    MediaListCollection(userName: $username, type: ANIME) {
        lists {
            entries {
                media {
                    title { english romaji }
                    episodes
                    format
                    status
                    genres
                    description
                    averageScore
                    seasonYear
                    coverImage { medium large extraLarge }
                }
                status
                score
            }
        }
    }
}
"#;

/// AniList GraphQL API client. Anonymous: only public lists are reachable.
#[derive(Debug, Clone)]
pub struct AniListClient {
    endpoint: String,
    http: Client,
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the POST carrying `{query, variables}`. No auth header: only
    /// public lists are queried.
    fn build_request(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<Request, AniListError> {
        Ok(self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .build()?)
    }

    fn list_collection_request(&self, username: &str) -> Result<Request, AniListError> {
        self.build_request(
            USER_LIST_QUERY,
            serde_json::json!({ "username": username.trim() }),
        )
    }

    async fn graphql_request<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: Request,
    ) -> Result<Option<T>, AniListError> {
        tracing::debug!(operation, endpoint = %self.endpoint, "AniList GraphQL request");

        let resp = self.http.execute(request).await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(operation, status = %status, bytes = body.len(), "AniList response received");

        decode_response(status, &body).inspect_err(|e| {
            tracing::warn!(operation, status = status.as_u16(), error = %e, "AniList request failed");
        })
    }

    /// Fetch every list group of `username`'s anime list in one request.
    pub async fn get_list_collection(
        &self,
        username: &str,
    ) -> Result<Option<MediaListCollection>, AniListError> {
        let request = self.list_collection_request(username)?;
        let data: Option<MediaListCollectionResponse> = self
            .graphql_request("MediaListCollection", request)
            .await?;

        Ok(data.and_then(|d| d.media_list_collection))
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSource for AniListClient {
    type Error = AniListError;

    async fn fetch_collection(
        &self,
        username: &str,
    ) -> Result<Option<MediaListCollection>, AniListError> {
        self.get_list_collection(username).await
    }
}

/// Interpret a GraphQL HTTP response.
///
/// AniList reports application errors (unknown user, private list) with a
/// non-2xx status *and* an `errors` array, so the envelope is inspected
/// before the status code. Other non-2xx replies report the status reason;
/// the body (often an HTML error page) is only logged.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Option<T>, AniListError> {
    match serde_json::from_str::<GraphQLResponse<T>>(body) {
        Ok(envelope) => {
            if let Some(first) = envelope.errors.into_iter().next() {
                return Err(AniListError::GraphQl(first.message));
            }
            if !status.is_success() {
                return Err(status_error(status, body));
            }
            Ok(envelope.data)
        }
        Err(_) if !status.is_success() => Err(status_error(status, body)),
        Err(e) => Err(AniListError::Parse(e.to_string())),
    }
}

fn status_error(status: StatusCode, body: &str) -> AniListError {
    tracing::debug!(status = status.as_u16(), body, "unexpected AniList response body");
    AniListError::Api {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    }
}
