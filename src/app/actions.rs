//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the library itself never talks to Zellij.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks Zellij for web access again after a denial.
    RequestWebAccess,

    /// Issues the launch list web request.
    FetchLaunches,

    /// Issues a rocket lookup for the detail view of `launch_id`.
    FetchRocket {
        /// Launch whose detail view requested the rocket.
        launch_id: String,
        /// Rocket identifier to look up.
        rocket_id: String,
    },
}
