use crate::domain::value_objects::{ResourcePath, Semester, SubjectCode};

/// Assembles the hierarchical catalog path from optional components.
///
/// Components are appended in the fixed order year → semester →
/// subject code → course number → CRN. An absent component is skipped
/// outright; no placeholder segment is inserted.
pub struct ResourcePathBuilder {
    parts: Vec<String>,
}

impl ResourcePathBuilder {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn year(mut self, year: Option<&str>) -> Self {
        if let Some(year) = year {
            self.parts.push(year.to_string());
        }
        self
    }

    pub fn semester(mut self, semester: Option<&Semester>) -> Self {
        if let Some(semester) = semester {
            self.parts.push(semester.as_str().to_string());
        }
        self
    }

    pub fn subject_code(mut self, subject_code: Option<&SubjectCode>) -> Self {
        if let Some(subject_code) = subject_code {
            self.parts.push(subject_code.as_str().to_string());
        }
        self
    }

    pub fn course_number(mut self, course_number: Option<&str>) -> Self {
        if let Some(course_number) = course_number {
            self.parts.push(course_number.to_string());
        }
        self
    }

    pub fn crn(mut self, crn: Option<&str>) -> Self {
        if let Some(crn) = crn {
            self.parts.push(crn.to_string());
        }
        self
    }

    /// Joins the collected components with `/` and appends the `.xml`
    /// suffix.
    ///
    /// With no components the join is empty and this yields the bare
    /// `.xml` path, which the catalog does not serve.
    /// TODO: special-case the empty query to request the schedule root
    /// instead.
    pub fn build(self) -> ResourcePath {
        ResourcePath::new(format!("{}.xml", self.parts.join("/")))
    }
}
