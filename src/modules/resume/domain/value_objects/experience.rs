use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use super::{bounded_text, contains_ignore_case, not_in_future, optional_text};
use crate::resume::domain::errors::ValidationError;

const MAX_DESCRIPTION_LEN: usize = 1000;

/// A position held at a company. No end date means the candidate still works there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    company: String,
    position: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    description: Option<String>,
}

impl Experience {
    pub fn try_new(
        company: &str,
        position: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_new_as_of(
            company,
            position,
            start_date,
            end_date,
            description,
            Utc::now().date_naive(),
        )
    }

    /// Same as [`Experience::try_new`] with an explicit "today".
    pub fn try_new_as_of(
        company: &str,
        position: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        description: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let company = bounded_text("company", company, 2, 100)?;
        let position = bounded_text("position", position, 2, 100)?;
        not_in_future("start_date", start_date, today)?;

        if let Some(end) = end_date {
            if end < start_date {
                return Err(ValidationError::EndBeforeStart);
            }
            not_in_future("end_date", end, today)?;
        }

        let description = optional_text("description", description, MAX_DESCRIPTION_LEN)?;

        Ok(Self {
            company,
            position,
            start_date,
            end_date,
            description,
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn duration_in_months(&self) -> u32 {
        self.duration_in_months_as_of(Utc::now().date_naive())
    }

    /// Whole calendar months between start and end (or `today` while current).
    pub fn duration_in_months_as_of(&self, today: NaiveDate) -> u32 {
        months_between(self.start_date, self.end_date.unwrap_or(today))
    }

    pub fn duration_in_years(&self) -> u32 {
        self.duration_in_months() / 12
    }

    pub fn company_contains(&self, keyword: &str) -> bool {
        contains_ignore_case(&self.company, keyword)
    }

    pub fn position_contains(&self, keyword: &str) -> bool {
        contains_ignore_case(&self.position, keyword)
    }
}

/// A partially elapsed month is not counted: 2020-01-15 .. 2020-02-14 is 0 months.
fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }

    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 30)
    }

    fn experience(start: NaiveDate, end: Option<NaiveDate>) -> Experience {
        Experience::try_new_as_of("Acme Corp", "Backend Engineer", start, end, None, today())
            .unwrap()
    }

    #[test]
    fn test_months_between_counts_whole_months() {
        assert_eq!(months_between(date(2020, 1, 15), date(2020, 2, 14)), 0);
        assert_eq!(months_between(date(2020, 1, 15), date(2020, 2, 15)), 1);
        assert_eq!(months_between(date(2018, 3, 1), date(2023, 3, 1)), 60);
        assert_eq!(months_between(date(2020, 5, 1), date(2020, 5, 1)), 0);
    }

    #[test]
    fn test_finished_experience_duration() {
        let exp = experience(date(2019, 1, 1), Some(date(2021, 7, 1)));

        assert_eq!(exp.duration_in_months_as_of(today()), 30);
        assert_eq!(exp.duration_in_months(), 30);
        assert_eq!(exp.duration_in_years(), 2);
        assert!(!exp.is_current());
    }

    #[test]
    fn test_current_experience_runs_until_today() {
        let exp = experience(date(2024, 6, 30), None);

        assert!(exp.is_current());
        assert_eq!(exp.duration_in_months_as_of(today()), 12);
    }

    #[test]
    fn test_rejects_future_dates_and_inverted_range() {
        let future = Experience::try_new_as_of(
            "Acme Corp",
            "Engineer",
            date(2025, 7, 1),
            None,
            None,
            today(),
        );
        assert_eq!(future, Err(ValidationError::FutureDate("start_date")));

        let inverted = Experience::try_new_as_of(
            "Acme Corp",
            "Engineer",
            date(2022, 1, 1),
            Some(date(2021, 1, 1)),
            None,
            today(),
        );
        assert_eq!(inverted, Err(ValidationError::EndBeforeStart));

        let future_end = Experience::try_new_as_of(
            "Acme Corp",
            "Engineer",
            date(2022, 1, 1),
            Some(date(2026, 1, 1)),
            None,
            today(),
        );
        assert_eq!(future_end, Err(ValidationError::FutureDate("end_date")));
    }

    #[test]
    fn test_rejects_out_of_range_text() {
        let short_company =
            Experience::try_new_as_of("A", "Engineer", date(2020, 1, 1), None, None, today());
        assert!(matches!(
            short_company,
            Err(ValidationError::Length {
                field: "company",
                ..
            })
        ));

        let long_description = Experience::try_new_as_of(
            "Acme Corp",
            "Engineer",
            date(2020, 1, 1),
            None,
            Some("x".repeat(1001)),
            today(),
        );
        assert!(matches!(
            long_description,
            Err(ValidationError::Length {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn test_keyword_matching_ignores_case() {
        let exp = experience(date(2020, 1, 1), None);

        assert!(exp.company_contains("acme"));
        assert!(exp.position_contains("ENGINEER"));
        assert!(!exp.position_contains("designer"));
    }
}
