use crate::domain::model::ApiResponse;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

/// 包裝 reqwest::Client，負責組出目標 URL 並讀回狀態碼與內容。
/// 不設定逾時，沿用 reqwest 預設值。
pub struct ApiClient {
    client: Client,
    root_url: String,
    api_base_url: String,
}

impl ApiClient {
    pub fn new(root_url: &str, api_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            root_url: root_url.to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.root_url(), config.api_base_url())
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub async fn get_root(&self) -> Result<ApiResponse> {
        tracing::debug!("📡 GET {}", self.root_url);
        self.send(self.client.get(&self.root_url)).await
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.api_url(path);
        tracing::debug!("📡 GET {}", url);
        self.send(self.client.get(url)).await
    }

    pub async fn get_with_bearer(&self, path: &str, token: &str) -> Result<ApiResponse> {
        let url = self.api_url(path);
        tracing::debug!("📡 GET {} (bearer)", url);
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let url = self.api_url(path);
        tracing::debug!("📡 POST {}", url);
        self.send(self.client.post(url).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProbeError;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/", "http://localhost:5000/api/");
        assert_eq!(client.api_url("exercises"), "http://localhost:5000/api/exercises");
        assert_eq!(client.api_url("/auth/me"), "http://localhost:5000/api/auth/me");
        assert_eq!(client.root_url(), "http://localhost:5000/");
    }

    #[tokio::test]
    async fn test_get_returns_status_and_body_for_error_statuses() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/skills");
            then.status(500).json_body(json!({"message": "Server error"}));
        });

        let client = ApiClient::new(&server.url("/"), &server.url("/api"));
        let response = client.get("skills").await.unwrap();

        mock.assert();
        assert_eq!(response.status, 500);
        assert_eq!(response.json().unwrap(), json!({"message": "Server error"}));
    }

    #[tokio::test]
    async fn test_get_with_bearer_sends_authorization_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("Authorization", "Bearer abc123");
            then.status(200).json_body(json!({"name": "Test User"}));
        });

        let client = ApiClient::new(&server.url("/"), &server.url("/api"));
        let response = client.get_with_bearer("auth/me", "abc123").await.unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/signup")
                .header("Content-Type", "application/json")
                .json_body(json!({"name": "Test User"}));
            then.status(201).json_body(json!({"user": {"name": "Test User"}}));
        });

        let client = ApiClient::new(&server.url("/"), &server.url("/api"));
        let response = client
            .post_json("auth/signup", &json!({"name": "Test User"}))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_connection_refused_is_api_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = format!("http://127.0.0.1:{}", port);
        let client = ApiClient::new(&format!("{}/", base), &format!("{}/api", base));

        let err = client.get_root().await.unwrap_err();
        assert!(matches!(err, ProbeError::ApiError(_)));
    }
}
