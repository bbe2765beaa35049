use crate::application::builders::path_builder::ResourcePathBuilder;
use crate::domain::entities::{CatalogQuery, Response};
use crate::domain::value_objects::Url;
use crate::infrastructure::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use hyper::StatusCode;

#[cfg(test)]
use mockall::automock;

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url) -> Result<Response>;
}

/// Application service for the fetch workflow
/// Builds the request URL from a catalog query and performs the single GET
pub struct CatalogService {
    http_client: Box<dyn HttpClient>,
    config: Config,
}

impl CatalogService {
    pub fn new(http_client: Box<dyn HttpClient>, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetches the catalog subset identified by `query`.
    ///
    /// A 200 passes the body through untouched. Any other status is not an
    /// error: the body is replaced with a descriptive message that callers
    /// persist in place of content. Transport-level failures propagate as
    /// `Err`.
    pub async fn fetch(&self, query: &CatalogQuery) -> Result<Response> {
        let url = self.request_url(query)?;
        let response = self.http_client.get(url).await?;

        if response.status != StatusCode::OK {
            return Ok(Response {
                status: response.status,
                body: fetch_error_message(query, response.status),
            });
        }

        Ok(response)
    }

    fn request_url(&self, query: &CatalogQuery) -> Result<Url> {
        let path = ResourcePathBuilder::new()
            .year(query.year.as_deref())
            .semester(query.semester.as_ref())
            .subject_code(query.subject_code.as_ref())
            .course_number(query.course_number.as_deref())
            .crn(query.crn.as_deref())
            .build();

        Url::new(&format!("{}{}", self.config.base_url, path.as_str()))
    }
}

// An absent CRN renders as the literal `None` in the persisted message.
fn fetch_error_message(query: &CatalogQuery, status: StatusCode) -> String {
    format!(
        "Error: Unable to fetch data for CRN {}. Status code: {}",
        query.crn.as_deref().unwrap_or("None"),
        status.as_u16()
    )
}
