use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::{bounded_text, contains_ignore_case, not_in_future};
use crate::resume::domain::errors::ValidationError;

const MAX_GPA: f32 = 4.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    school: String,
    degree: String,
    major: String,
    graduation_date: NaiveDate,
    gpa: Option<f32>,
}

impl Education {
    pub fn try_new(
        school: &str,
        degree: &str,
        major: &str,
        graduation_date: NaiveDate,
        gpa: Option<f32>,
    ) -> Result<Self, ValidationError> {
        Self::try_new_as_of(
            school,
            degree,
            major,
            graduation_date,
            gpa,
            Utc::now().date_naive(),
        )
    }

    pub fn try_new_as_of(
        school: &str,
        degree: &str,
        major: &str,
        graduation_date: NaiveDate,
        gpa: Option<f32>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let school = bounded_text("school", school, 2, 100)?;
        let degree = bounded_text("degree", degree, 2, 50)?;
        let major = bounded_text("major", major, 2, 100)?;
        not_in_future("graduation_date", graduation_date, today)?;

        if let Some(gpa) = gpa {
            if !(0.0..=MAX_GPA).contains(&gpa) {
                return Err(ValidationError::OutOfRange {
                    field: "gpa",
                    reason: format!("{gpa} is outside 0.0..={MAX_GPA}"),
                });
            }
        }

        Ok(Self {
            school,
            degree,
            major,
            graduation_date,
            gpa,
        })
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn graduation_date(&self) -> NaiveDate {
        self.graduation_date
    }

    pub fn gpa(&self) -> Option<f32> {
        self.gpa
    }

    pub fn major_contains(&self, keyword: &str) -> bool {
        contains_ignore_case(&self.major, keyword)
    }
}
