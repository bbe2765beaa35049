use crate::domain::value_objects::{Semester, SubjectCode};
use hyper::StatusCode;

/// Identifies the catalog subset being requested.
///
/// Each field is independently optional; an absent field contributes no
/// path segment, the request path simply shortens.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub year: Option<String>,
    pub semester: Option<Semester>,
    pub subject_code: Option<SubjectCode>,
    pub course_number: Option<String>,
    pub crn: Option<String>,
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}
