use crate::application::services::HttpClient;
use crate::domain::entities::Response;
use crate::domain::value_objects::Url;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request as HyperRequest};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        let connector = HttpConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpConnector, Full<Bytes>>(connector);
        Self { client }
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn get(&self, url: Url) -> Result<Response> {
        let request = GetRequestAdapter::to_hyper_request(&url)?;
        let response = self.execute_http_request(request).await?;
        ResponseAdapter::to_domain_response(response).await
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>> {
        self.client
            .request(request)
            .await
            .map_err(|e| anyhow!("HTTP request execution failed: {}", e))
    }
}

/// Adapter for converting catalog URLs into bare GET requests
struct GetRequestAdapter;

impl GetRequestAdapter {
    fn to_hyper_request(url: &Url) -> Result<HyperRequest<Full<Bytes>>> {
        HyperRequest::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .body(Full::new(Bytes::new()))
            .map_err(|e| anyhow!("Failed to build HTTP request: {}", e))
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response> {
        let status = hyper_response.status();
        let body = Self::extract_response_body(hyper_response).await?;

        Ok(Response { status, body })
    }

    async fn extract_response_body(
        response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<String> {
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?
            .to_bytes();

        String::from_utf8(body_bytes.to_vec())
            .map_err(|e| anyhow!("Response body contains invalid UTF-8: {}", e))
    }
}
