//! Launch domain model.
//!
//! A [`Launch`] is one historical or scheduled mission record from the public launch
//! API, already normalized at the data-source boundary (see [`crate::api`]). The
//! core never mutates launches; it only filters, slices and displays them.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a launch as reported by the data source.
///
/// The API reports this as a nullable boolean; `Unknown` covers both `null` and a
/// missing field (typically upcoming launches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    Success,
    Failure,
    Unknown,
}

impl From<Option<bool>> for LaunchOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Success,
            Some(false) => Self::Failure,
            None => Self::Unknown,
        }
    }
}

/// Minimal rocket data embedded in a launch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketSummary {
    /// Rocket identifier, when the inline object carries one.
    pub id: Option<String>,
    pub name: String,
}

/// Reference from a launch to its rocket.
///
/// The API returns either a bare identifier or an inline (populated) object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RocketRef {
    Inline(RocketSummary),
    ById(String),
}

impl RocketRef {
    /// Identifier usable for a rocket detail fetch, if one is known.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Inline(summary) => summary.id.as_deref(),
            Self::ById(id) => Some(id),
        }
    }

    /// Display name, only available for inline references.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Inline(summary) => Some(&summary.name),
            Self::ById(_) => None,
        }
    }
}

/// Optional external links attached to a launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Small mission patch image.
    pub patch: Option<String>,
    pub webcast: Option<String>,
    pub wikipedia: Option<String>,
    pub article: Option<String>,
}

/// Full rocket record fetched lazily for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketInfo {
    pub id: String,
    pub name: String,
    /// Vehicle type as reported by the API (e.g. "rocket").
    pub kind: String,
    pub company: String,
}

/// One launch record.
///
/// `id` is unique within one fetched batch. `date_utc` is kept verbatim as the
/// ISO-8601 string returned by the API and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub date_utc: String,
    pub outcome: LaunchOutcome,
    pub upcoming: bool,
    pub rocket: Option<RocketRef>,
    pub links: LaunchLinks,
    pub flight_number: Option<u32>,
    pub details: Option<String>,
    /// Launchpad name, present only when the API returned an inline launchpad.
    pub launchpad: Option<String>,
}

impl Launch {
    /// Creates a launch with the required fields; everything optional is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use launchdeck::domain::{Launch, LaunchOutcome};
    ///
    /// let launch = Launch::new("a", "Starlink 1", "2023-01-01T00:00:00.000Z", LaunchOutcome::Success);
    /// assert_eq!(launch.year(), Some(2023));
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date_utc: impl Into<String>,
        outcome: LaunchOutcome,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_utc: date_utc.into(),
            outcome,
            upcoming: false,
            rocket: None,
            links: LaunchLinks::default(),
            flight_number: None,
            details: None,
            launchpad: None,
        }
    }

    /// Parses `date_utc` as RFC 3339 and normalizes it to UTC.
    ///
    /// Returns `None` when the source string is not a valid timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_utc)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Calendar year of the launch, always interpreted in UTC.
    ///
    /// A launch at `2022-12-31T23:30:00-02:00` is therefore in 2023.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.timestamp().map(|dt| dt.year())
    }

    /// Display status derived from the upcoming flag and the outcome.
    #[must_use]
    pub const fn status(&self) -> LaunchStatus {
        if self.upcoming {
            return LaunchStatus::Upcoming;
        }
        match self.outcome {
            LaunchOutcome::Success => LaunchStatus::Successful,
            LaunchOutcome::Failure => LaunchStatus::Failed,
            LaunchOutcome::Unknown => LaunchStatus::Tbd,
        }
    }
}

/// Status shown on cards and in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Upcoming,
    Successful,
    Failed,
    Tbd,
}

impl LaunchStatus {
    /// Short badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Successful => "Success",
            Self::Failed => "Failed",
            Self::Tbd => "TBD",
        }
    }

    /// One-line description for the detail panel.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Upcoming => "This launch is scheduled for the future",
            Self::Successful => "This mission completed successfully",
            Self::Failed => "This mission did not complete successfully",
            Self::Tbd => "Mission status to be determined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_nullable_bool() {
        assert_eq!(LaunchOutcome::from(Some(true)), LaunchOutcome::Success);
        assert_eq!(LaunchOutcome::from(Some(false)), LaunchOutcome::Failure);
        assert_eq!(LaunchOutcome::from(None), LaunchOutcome::Unknown);
    }

    #[test]
    fn year_is_taken_in_utc() {
        let late_offset = Launch::new("x", "x", "2022-12-31T23:30:00-02:00", LaunchOutcome::Unknown);
        assert_eq!(late_offset.year(), Some(2023));

        let early_offset = Launch::new("y", "y", "2023-01-01T00:30:00+02:00", LaunchOutcome::Unknown);
        assert_eq!(early_offset.year(), Some(2022));
    }

    #[test]
    fn unparseable_timestamp_has_no_year() {
        let launch = Launch::new("x", "x", "soon", LaunchOutcome::Unknown);
        assert_eq!(launch.timestamp(), None);
        assert_eq!(launch.year(), None);
    }

    #[test]
    fn upcoming_takes_precedence_over_outcome() {
        let mut launch = Launch::new("x", "x", "2030-01-01T00:00:00Z", LaunchOutcome::Success);
        assert_eq!(launch.status(), LaunchStatus::Successful);
        launch.upcoming = true;
        assert_eq!(launch.status(), LaunchStatus::Upcoming);
        assert_eq!(launch.status().label(), "Upcoming");
    }

    #[test]
    fn rocket_ref_accessors() {
        let inline = RocketRef::Inline(RocketSummary { id: None, name: "Falcon 9".into() });
        assert_eq!(inline.id(), None);
        assert_eq!(inline.name(), Some("Falcon 9"));

        let by_id = RocketRef::ById("5e9d0d95eda69973a809d1ec".into());
        assert_eq!(by_id.id(), Some("5e9d0d95eda69973a809d1ec"));
        assert_eq!(by_id.name(), None);
    }
}
