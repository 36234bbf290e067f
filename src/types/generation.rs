//! Generation settings and related enums.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Settings controlling text generation.
///
/// ```
/// use tallyloop::types::GenerationSettings;
///
/// let settings = GenerationSettings::builder().temperature(0.0).build();
/// assert_eq!(settings.temperature, Some(0.0));
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationSettings {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
}
