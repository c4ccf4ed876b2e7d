use crate::{config::ProvisionRequest, error::Error};
use reqwest::{
    Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body
    ///
    /// # Errors
    ///
    /// Returns `Error::Malformed` if the body does not match `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::Malformed(e.to_string()))
    }

    /// Turn an unsuccessful response into its error
    #[must_use]
    pub fn into_error(self) -> Error {
        Error::from_response(self.status, &self.body)
    }
}

/// Tembo API client scoped to one organization
pub struct Client {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl Client {
    /// Build a client for `{endpoint}/api/v1/orgs/{org_id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(
        endpoint: &str,
        org_id: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: format!("{}/api/v1/orgs/{org_id}", endpoint.trim_end_matches('/')),
            token: token.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_request(request: &ProvisionRequest) -> Result<Self, Error> {
        Self::new(
            &request.api_endpoint,
            &request.org_id,
            &request.token,
            request.request_timeout,
        )
    }

    /// Absolute URL of a path below the organization
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| Error::InvalidToken)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// # Errors
    ///
    /// Returns an error if no response is received
    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.send(Method::GET, path, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns an error if no response is received
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, Error> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns an error if no response is received
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<ApiResponse, Error> {
        let url = self.url(path);
        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers()?);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{method} {url} -> {status}");

        Ok(ApiResponse { status, body })
    }
}
