//! Request construction and response routing.
//!
//! Zellij delivers every web response through the same event, carrying back the
//! context map attached to the request. [`RequestKind`] is encoded into that map
//! so the plugin knows which request a response answers.

use std::collections::BTreeMap;

/// Public launch API used when no `api_base_url` is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Shown on the error screen when the launch list cannot be fetched.
pub const LAUNCHES_FAILED_MESSAGE: &str = "Failed to fetch launches. Please try again later.";

/// Logged when a rocket detail fetch fails; the panel degrades instead.
pub const ROCKET_FAILED_MESSAGE: &str = "Failed to fetch rocket details.";

const KIND_KEY: &str = "request";
const LAUNCH_ID_KEY: &str = "launch_id";

#[must_use]
pub fn launches_url(base: &str) -> String {
    format!("{}/launches", base.trim_end_matches('/'))
}

#[must_use]
pub fn rocket_url(base: &str, rocket_id: &str) -> String {
    format!("{}/rockets/{rocket_id}", base.trim_end_matches('/'))
}

/// Which fetch an outstanding web request belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Launches,
    /// Rocket lookup issued for the detail view of `launch_id`.
    Rocket { launch_id: String },
}

impl RequestKind {
    /// Encodes the kind as a web-request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::Launches => {
                context.insert(KIND_KEY.to_string(), "launches".to_string());
            }
            Self::Rocket { launch_id } => {
                context.insert(KIND_KEY.to_string(), "rocket".to_string());
                context.insert(LAUNCH_ID_KEY.to_string(), launch_id.clone());
            }
        }
        context
    }

    /// Decodes a context map produced by [`RequestKind::to_context`].
    ///
    /// Returns `None` for responses to requests this plugin did not tag.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(KIND_KEY).map(String::as_str) {
            Some("launches") => Some(Self::Launches),
            Some("rocket") => context.get(LAUNCH_ID_KEY).map(|launch_id| Self::Rocket {
                launch_id: launch_id.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_the_base() {
        assert_eq!(launches_url(DEFAULT_API_BASE_URL), "https://api.spacexdata.com/v4/launches");
        assert_eq!(
            rocket_url("http://localhost:8080/v4/", "5e9d0d95eda69973a809d1ec"),
            "http://localhost:8080/v4/rockets/5e9d0d95eda69973a809d1ec"
        );
    }

    #[test]
    fn rocket_context_carries_launch_id() {
        let kind = RequestKind::Rocket {
            launch_id: "5eb87cd9ffd86e000604b32a".into(),
        };
        assert_eq!(RequestKind::from_context(&kind.to_context()), Some(kind));
        assert_eq!(
            RequestKind::from_context(&RequestKind::Launches.to_context()),
            Some(RequestKind::Launches)
        );
    }

    #[test]
    fn foreign_or_incomplete_context_is_rejected() {
        assert_eq!(RequestKind::from_context(&BTreeMap::new()), None);

        let mut context = BTreeMap::new();
        context.insert("request".to_string(), "rocket".to_string());
        assert_eq!(RequestKind::from_context(&context), None);
    }
}
