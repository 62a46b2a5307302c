//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw format - response body exactly as received
    #[default]
    Raw,
    /// JSON format - body wrapped with endpoint, status and metadata
    Json,
}
