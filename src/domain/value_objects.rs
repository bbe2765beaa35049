use anyhow::{Result, anyhow};
use hyper::http::Uri;

/// Represents a validated URL
#[derive(Debug, Clone)]
pub struct Url(pub Uri);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(anyhow::Error)` - If the URL is invalid
    pub fn new(url: &str) -> Result<Self> {
        let uri = url.parse::<Uri>().map_err(|e| anyhow!("Invalid URL: {}", e))?;
        Ok(Url(uri))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

/// Semester in the lowercase form the catalog expects (e.g., "fall")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester(String);

impl Semester {
    /// Normalizes the raw value to lowercase. Already-lowercase input is
    /// unchanged, so construction is idempotent.
    pub fn new(raw: &str) -> Self {
        Semester(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Subject code in the uppercase form the catalog expects (e.g., "CS")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCode(String);

impl SubjectCode {
    /// Normalizes the raw value to uppercase. Already-uppercase input is
    /// unchanged, so construction is idempotent.
    pub fn new(raw: &str) -> Self {
        SubjectCode(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hierarchical path segment identifying a catalog subset, suffix included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath(String);

impl ResourcePath {
    pub fn new(path: String) -> Self {
        ResourcePath(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
