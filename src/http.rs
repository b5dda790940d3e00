//! HTTP client wrapper for Google Drive API requests.

use crate::error::{GDriveError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client carrying the bearer token for authenticated requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client around an OAuth access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
        }
    }

    /// Make a GET request and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode_json(response).await
    }

    /// Make a GET request and return the raw response body.
    pub async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::decode_json(response).await
    }

    /// Make a POST request with a raw body and explicit content type,
    /// decoding the JSON response.
    pub async fn post_body<T: DeserializeOwned>(
        &self,
        url: Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        Self::decode_json(response).await
    }

    /// Reject non-success statuses, carrying the response body in the error.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GDriveError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }
}
