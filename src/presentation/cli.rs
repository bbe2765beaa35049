use crate::application::services::CatalogService;
use crate::domain::entities::CatalogQuery;
use crate::domain::value_objects::{Semester, SubjectCode};
use crate::infrastructure::output;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// CLI configuration for Courl
#[derive(Parser, Debug)]
#[command(name = "Courl", version = "0.1.0")]
#[command(
    about = "Fetch course information from the university course catalog",
    long_about = None
)]
pub struct Cli {
    /// Academic year (e.g., 2023)
    #[arg(long)]
    pub year: Option<String>,

    /// Semester (fall, spring, summer)
    #[arg(long)]
    pub semester: Option<String>,

    /// Subject code (e.g., CS)
    #[arg(long = "subject_code")]
    pub subject_code: Option<String>,

    /// Course number (e.g., 101)
    #[arg(long = "course_number")]
    pub course_number: Option<String>,

    /// Course registration number (CRN)
    #[arg(long)]
    pub crn: Option<String>,

    /// File the raw response is saved to
    #[arg(short, long, default_value = "response.xml")]
    pub output: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self, catalog_service: &CatalogService) -> Result<()> {
        let response = catalog_service.fetch(&self.query()).await?;

        if self.verbose {
            println!("{}", format!("Status: {}", response.status).cyan());
        }

        output::save_response(&self.output, &response.body)?;
        println!("Saved raw response to {}", self.output.display());

        Ok(())
    }

    /// Lifts the raw flag values into the query, normalizing the
    /// case-insensitive components on the way in.
    fn query(&self) -> CatalogQuery {
        CatalogQuery {
            year: self.year.clone(),
            semester: self.semester.as_deref().map(Semester::new),
            subject_code: self.subject_code.as_deref().map(SubjectCode::new),
            course_number: self.course_number.clone(),
            crn: self.crn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn every_flag_is_optional() {
        let cli = parse(&["courl"]);

        assert!(cli.year.is_none());
        assert!(cli.semester.is_none());
        assert!(cli.subject_code.is_none());
        assert!(cli.course_number.is_none());
        assert!(cli.crn.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.output, PathBuf::from("response.xml"));
    }

    #[test]
    fn underscored_long_flags_parse_verbatim() {
        let cli = parse(&["courl", "--subject_code", "cs", "--course_number", "101"]);

        assert_eq!(cli.subject_code.as_deref(), Some("cs"));
        assert_eq!(cli.course_number.as_deref(), Some("101"));
    }

    #[test]
    fn a_full_invocation_parses() {
        let cli = parse(&[
            "courl",
            "--year",
            "2025",
            "--semester",
            "fall",
            "--subject_code",
            "CS",
            "--course_number",
            "101",
            "--crn",
            "12345",
            "--output",
            "cs101.xml",
            "--verbose",
        ]);

        assert_eq!(cli.year.as_deref(), Some("2025"));
        assert_eq!(cli.crn.as_deref(), Some("12345"));
        assert_eq!(cli.output, PathBuf::from("cs101.xml"));
        assert!(cli.verbose);
    }

    #[test]
    fn the_query_carries_normalized_components() {
        let cli = parse(&["courl", "--semester", "FALL", "--subject_code", "cs"]);
        let query = cli.query();

        assert_eq!(query.semester.unwrap().as_str(), "fall");
        assert_eq!(query.subject_code.unwrap().as_str(), "CS");
        assert!(query.year.is_none());
    }
}
