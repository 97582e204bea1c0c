pub mod cli_consts {
    //! Tuning constants for the dashboard, grouped by functional area.

    // =============================================================================
    // CHANNEL CAPACITIES
    // =============================================================================
    // Queue sizes are larger than the three settlement events a session produces
    // so refresh chatter never causes a worker to block on a full channel.

    /// Cap on the activity log; older entries are dropped past this point.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the worker-to-UI event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // HTTP TIMEOUTS
    // =============================================================================

    /// Feed request timing configuration
    pub mod feed_requests {
        use std::time::Duration;

        /// Maximum time to wait for a connection to a feed endpoint (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time to wait for a complete feed response (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// UI loop timing configuration
    pub mod ui {
        use std::time::Duration;

        /// Interval between polls for terminal input events (milliseconds)
        pub const INPUT_POLL_INTERVAL_MS: u64 = 100;

        /// How long the splash screen is shown before the dashboard (seconds)
        pub const SPLASH_DURATION_SECS: u64 = 2;

        /// Helper function to get the input poll interval
        pub const fn input_poll_interval() -> Duration {
            Duration::from_millis(INPUT_POLL_INTERVAL_MS)
        }

        /// Helper function to get the splash screen duration
        pub const fn splash_duration() -> Duration {
            Duration::from_secs(SPLASH_DURATION_SECS)
        }
    }
}
