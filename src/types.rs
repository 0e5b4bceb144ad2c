use clap::ValueEnum;
use serde::Deserialize;

/// How the recommended order is printed.
///
/// - `Text`: numbered list, plus a projection table when a start date is known
///   (default).
/// - `Json`: the `{ "recommendedOrder": [...] }` response body, or an error body
///   when scheduling fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
