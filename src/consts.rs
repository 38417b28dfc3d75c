pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! All tuning constants for the dashboard client, organized by
    //! functional area.

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Duration of the splash screen before the dashboard appears.
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Poll interval for terminal key events (milliseconds).
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;

    /// Number of product rows shown in the distribution chart.
    pub const DISTRIBUTION_CHART_ROWS: usize = 8;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP request timeouts.
    pub mod http {
        use std::time::Duration;

        /// Timeout for establishing a connection to the backend.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout. Report generation can be slow on the
        /// server side, so this is looser than the connect timeout.
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // EXPORT CONFIGURATION
    // =============================================================================

    /// Fixed filenames for downloaded reports, matching what the backend
    /// advertises in its Content-Disposition headers.
    pub mod exports {
        pub const PDF_FILENAME: &str = "sales_report.pdf";
        pub const EXCEL_FILENAME: &str = "sales_report.xlsx";
        pub const CSV_FILENAME: &str = "sales_report.csv";
    }
}
