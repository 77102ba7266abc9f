//! Filter state and the filter engine.
//!
//! [`filter_launches`] is a pure function of the launch list, the active
//! [`FilterState`] and the favorite set. Predicates are AND-composed and
//! commute; the result keeps the input order.

use crate::domain::{FavoriteSet, Launch, LaunchOutcome};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Year constraint of the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    fn matches(self, launch: &Launch) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => launch.year() == Some(year),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearFilter {
    type Err = String;

    /// Accepts `"all"` or a four-digit year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().map(Self::Year).map_err(|e| e.to_string());
        }
        Err(format!("invalid year filter: {s}"))
    }
}

/// Active filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against launch names. Empty disables it.
    pub search_term: String,
    pub year: YearFilter,
    /// Keep only launches whose outcome is exactly `Success`.
    pub successful_only: bool,
    /// Keep only launches in the favorite set.
    pub show_favorites: bool,
}

impl FilterState {
    /// Applies every field present in `update`.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(successful_only) = update.successful_only {
            self.successful_only = successful_only;
        }
        if let Some(show_favorites) = update.show_favorites {
            self.show_favorites = show_favorites;
        }
    }
}

/// Partial [`FilterState`]; `None` fields are left untouched by a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub year: Option<YearFilter>,
    pub successful_only: Option<bool>,
    pub show_favorites: Option<bool>,
}

impl FilterUpdate {
    #[must_use]
    pub fn search_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn year(year: YearFilter) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn successful_only(enabled: bool) -> Self {
        Self {
            successful_only: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn show_favorites(enabled: bool) -> Self {
        Self {
            show_favorites: Some(enabled),
            ..Self::default()
        }
    }
}

/// Returns the launches matching every active predicate, in input order.
///
/// 1. non-empty `search_term`: lowercased name contains lowercased term
/// 2. `year` other than `All`: UTC calendar year equals the filter year
/// 3. `successful_only`: outcome is `Success` (unknown and failure excluded)
/// 4. `show_favorites`: id is in `favorites`
///
/// # Examples
///
/// ```
/// use launchdeck::app::filters::{filter_launches, FilterState};
/// use launchdeck::domain::{FavoriteSet, Launch, LaunchOutcome};
///
/// let launches = vec![
///     Launch::new("a", "Starlink 1", "2023-01-01T00:00:00.000Z", LaunchOutcome::Success),
///     Launch::new("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure),
/// ];
/// let filters = FilterState { search_term: "star".into(), ..FilterState::default() };
///
/// let filtered = filter_launches(&launches, &filters, &FavoriteSet::default());
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id, "a");
/// ```
#[must_use]
pub fn filter_launches(launches: &[Launch], filters: &FilterState, favorites: &FavoriteSet) -> Vec<Launch> {
    let _span = tracing::debug_span!("filter_launches",
        total = launches.len(),
        term_len = filters.search_term.len(),
        year = %filters.year,
        successful_only = filters.successful_only,
        show_favorites = filters.show_favorites
    ).entered();

    let term = (!filters.search_term.is_empty()).then(|| filters.search_term.to_lowercase());

    let filtered: Vec<Launch> = launches
        .iter()
        .filter(|launch| {
            term.as_ref()
                .map_or(true, |term| launch.name.to_lowercase().contains(term.as_str()))
        })
        .filter(|launch| filters.year.matches(launch))
        .filter(|launch| !filters.successful_only || launch.outcome == LaunchOutcome::Success)
        .filter(|launch| !filters.show_favorites || favorites.contains(&launch.id))
        .cloned()
        .collect();

    tracing::debug!(filtered = filtered.len(), "filters applied");
    filtered
}

/// Distinct UTC launch years, newest first.
#[must_use]
pub fn year_options(launches: &[Launch]) -> Vec<i32> {
    let years: BTreeSet<i32> = launches.iter().filter_map(Launch::year).collect();
    years.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(id: &str, name: &str, date: &str, outcome: LaunchOutcome) -> Launch {
        Launch::new(id, name, date, outcome)
    }

    fn sample() -> Vec<Launch> {
        vec![
            launch("a", "Starlink 1", "2023-01-01T12:00:00.000Z", LaunchOutcome::Success),
            launch("b", "CRS-1", "2022-06-01T12:00:00.000Z", LaunchOutcome::Failure),
        ]
    }

    fn ids(launches: &[Launch]) -> Vec<&str> {
        launches.iter().map(|l| l.id.as_str()).collect()
    }

    fn catalogue() -> Vec<Launch> {
        vec![
            launch("1", "FalconSat", "2006-03-24T22:30:00.000Z", LaunchOutcome::Failure),
            launch("2", "Starlink-1", "2019-11-11T14:56:00.000Z", LaunchOutcome::Success),
            launch("3", "CRS-20", "2020-03-07T04:50:31.000Z", LaunchOutcome::Success),
            launch("4", "Starlink-5", "2020-03-18T12:16:39.000Z", LaunchOutcome::Success),
            launch("5", "Crew-5", "2022-10-05T16:00:00.000Z", LaunchOutcome::Unknown),
            launch("6", "starlink group 4-36", "2022-10-20T14:50:00.000Z", LaunchOutcome::Unknown),
        ]
    }

    fn every_filter_state(favorites_year: i32) -> Vec<FilterState> {
        let mut states = Vec::new();
        for term in ["", "star", "crs", "zzz"] {
            for year in [YearFilter::All, YearFilter::Year(2020), YearFilter::Year(favorites_year)] {
                for successful_only in [false, true] {
                    for show_favorites in [false, true] {
                        states.push(FilterState {
                            search_term: term.to_string(),
                            year,
                            successful_only,
                            show_favorites,
                        });
                    }
                }
            }
        }
        states
    }

    #[test]
    fn search_term_matches_case_insensitively() {
        let filters = FilterState {
            search_term: "star".into(),
            ..FilterState::default()
        };
        let filtered = filter_launches(&sample(), &filters, &FavoriteSet::default());
        assert_eq!(ids(&filtered), vec!["a"]);

        let upper = FilterState {
            search_term: "STARLINK".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_launches(&catalogue(), &upper, &FavoriteSet::default())), vec!["2", "4", "6"]);
    }

    #[test]
    fn successful_only_excludes_failure_and_unknown() {
        let filters = FilterState {
            successful_only: true,
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_launches(&sample(), &filters, &FavoriteSet::default())), vec!["a"]);
        assert_eq!(
            ids(&filter_launches(&catalogue(), &filters, &FavoriteSet::default())),
            vec!["2", "3", "4"]
        );
    }

    #[test]
    fn show_favorites_keeps_only_members() {
        let favorites = FavoriteSet::default().toggled("b");
        let filters = FilterState {
            show_favorites: true,
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_launches(&sample(), &filters, &favorites)), vec!["b"]);
    }

    #[test]
    fn year_filter_uses_utc_year() {
        let filters = FilterState {
            year: YearFilter::Year(2020),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_launches(&catalogue(), &filters, &FavoriteSet::default())), vec!["3", "4"]);
    }

    #[test]
    fn no_filters_is_identity() {
        let launches = catalogue();
        assert_eq!(filter_launches(&launches, &FilterState::default(), &FavoriteSet::default()), launches);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let filters = FilterState {
            search_term: "star".into(),
            successful_only: true,
            ..FilterState::default()
        };
        assert!(filter_launches(&[], &filters, &FavoriteSet::default()).is_empty());
    }

    #[test]
    fn output_is_an_ordered_subsequence_for_every_combination() {
        let launches = catalogue();
        let favorites = FavoriteSet::default().toggled("4").toggled("1");

        for filters in every_filter_state(2006) {
            let filtered = filter_launches(&launches, &filters, &favorites);

            let mut cursor = launches.iter();
            for kept in &filtered {
                assert!(
                    cursor.any(|candidate| candidate == kept),
                    "{filters:?} reordered or duplicated {}",
                    kept.id
                );
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let launches = catalogue();
        let favorites = FavoriteSet::default().toggled("2");

        for filters in every_filter_state(2019) {
            let once = filter_launches(&launches, &filters, &favorites);
            let twice = filter_launches(&once, &filters, &favorites);
            assert_eq!(once, twice, "{filters:?}");
            assert_eq!(once, filter_launches(&launches, &filters, &favorites));
        }
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut state = FilterState {
            search_term: "crs".into(),
            ..FilterState::default()
        };
        state.merge(FilterUpdate::successful_only(true));
        assert_eq!(state.search_term, "crs");
        assert!(state.successful_only);
        assert!(!state.show_favorites);
        assert_eq!(state.year, YearFilter::All);
    }

    #[test]
    fn year_filter_parsing() {
        assert_eq!("all".parse::<YearFilter>(), Ok(YearFilter::All));
        assert_eq!("2020".parse::<YearFilter>(), Ok(YearFilter::Year(2020)));
        assert!("20".parse::<YearFilter>().is_err());
        assert!("20x0".parse::<YearFilter>().is_err());
        assert_eq!(YearFilter::Year(2020).to_string(), "2020");
    }

    #[test]
    fn year_options_are_distinct_and_newest_first() {
        let mut launches = catalogue();
        launches.push(launch("7", "bad date", "tbd", LaunchOutcome::Unknown));
        assert_eq!(year_options(&launches), vec![2022, 2020, 2019, 2006]);
    }
}
