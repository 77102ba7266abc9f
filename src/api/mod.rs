//! Boundary to the remote launch API.
//!
//! The plugin cannot do network I/O itself; it asks Zellij to run a web request
//! and later receives the response as an event. This module builds the request
//! URLs, tags requests so responses can be routed, and decodes response bodies
//! into domain types.
//!
//! # Examples
//!
//! ```
//! use launchdeck::api::{decode_launches, launches_url, DEFAULT_API_BASE_URL};
//!
//! assert_eq!(launches_url(DEFAULT_API_BASE_URL), "https://api.spacexdata.com/v4/launches");
//!
//! let body = br#"[{"id":"a","name":"Starlink 1","date_utc":"2023-01-01T00:00:00.000Z","success":true}]"#;
//! let launches = decode_launches(200, body)?;
//! assert_eq!(launches[0].year(), Some(2023));
//! # Ok::<(), launchdeck::LaunchdeckError>(())
//! ```

pub mod records;
pub mod requests;

pub use records::{decode_launches, decode_rocket};
pub use requests::{
    launches_url, rocket_url, RequestKind, DEFAULT_API_BASE_URL, LAUNCHES_FAILED_MESSAGE,
    ROCKET_FAILED_MESSAGE,
};
