//! Wire records of the launch API and their normalization into domain types.
//!
//! The API is loose about shapes: `success` is nullable, `rocket` and
//! `launchpad` are either an identifier or a populated object, and most other
//! fields may be `null`. All of that is resolved here so the domain model only
//! sees explicit variants.

use crate::domain::error::{LaunchdeckError, Result};
use crate::domain::{Launch, LaunchLinks, LaunchOutcome, RocketInfo, RocketRef, RocketSummary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawLaunch {
    id: String,
    name: String,
    date_utc: String,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    upcoming: Option<bool>,
    #[serde(default)]
    rocket: Option<RawRocketRef>,
    #[serde(default)]
    links: Option<RawLinks>,
    #[serde(default)]
    flight_number: Option<u32>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    launchpad: Option<RawLaunchpadRef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRocketRef {
    Id(String),
    Inline {
        #[serde(default)]
        id: Option<String>,
        name: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLaunchpadRef {
    Id(String),
    Inline {
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawLinks {
    #[serde(default)]
    patch: Option<RawPatch>,
    #[serde(default)]
    webcast: Option<String>,
    #[serde(default)]
    wikipedia: Option<String>,
    #[serde(default)]
    article: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPatch {
    #[serde(default)]
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRocket {
    id: String,
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    company: Option<String>,
}

impl From<RawLaunch> for Launch {
    fn from(raw: RawLaunch) -> Self {
        let links = raw.links.unwrap_or_default();
        Self {
            id: raw.id,
            name: raw.name,
            date_utc: raw.date_utc,
            outcome: LaunchOutcome::from(raw.success),
            upcoming: raw.upcoming.unwrap_or(false),
            rocket: raw.rocket.map(|rocket| match rocket {
                RawRocketRef::Id(id) => RocketRef::ById(id),
                RawRocketRef::Inline { id, name } => RocketRef::Inline(RocketSummary { id, name }),
            }),
            links: LaunchLinks {
                patch: links.patch.and_then(|patch| patch.small),
                webcast: links.webcast,
                wikipedia: links.wikipedia,
                article: links.article,
            },
            flight_number: raw.flight_number,
            details: raw.details.filter(|details| !details.trim().is_empty()),
            // A bare launchpad id carries no displayable name.
            launchpad: raw.launchpad.and_then(|pad| match pad {
                RawLaunchpadRef::Id(_) => None,
                RawLaunchpadRef::Inline { name } => name,
            }),
        }
    }
}

impl From<RawRocket> for RocketInfo {
    fn from(raw: RawRocket) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            kind: raw.kind.unwrap_or_default(),
            company: raw.company.unwrap_or_default(),
        }
    }
}

fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LaunchdeckError::Fetch(format!("HTTP error! status: {status}")))
    }
}

/// Decodes a launch list response, preserving the order returned by the API.
///
/// # Errors
///
/// Returns [`LaunchdeckError::Fetch`] for a non-2xx status and
/// [`LaunchdeckError::Decode`] when the body is not a launch array.
pub fn decode_launches(status: u16, body: &[u8]) -> Result<Vec<Launch>> {
    check_status(status)?;
    let raw: Vec<RawLaunch> = serde_json::from_slice(body)?;
    Ok(raw.into_iter().map(Launch::from).collect())
}

/// Decodes a single rocket response.
///
/// # Errors
///
/// Returns [`LaunchdeckError::Fetch`] for a non-2xx status and
/// [`LaunchdeckError::Decode`] when the body is not a rocket object.
pub fn decode_rocket(status: u16, body: &[u8]) -> Result<RocketInfo> {
    check_status(status)?;
    let raw: RawRocket = serde_json::from_slice(body)?;
    Ok(raw.into())
}
