//! Render configuration types.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How many columns a rendered row carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Identity, status, and health only.
    #[default]
    Terse,
    /// Adds age and health reason.
    Detailed,
}

/// Configuration for rendering operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenderConfig {
    /// Column set to render.
    #[builder(default)]
    #[serde(default)]
    pub detail: Detail,

    /// Write a header line before the rows.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub show_headers: bool,

    /// Reference time for age calculations (default: now).
    #[builder(default = "Utc::now()")]
    #[serde(default = "Utc::now")]
    pub reference_time: DateTime<Utc>,

    /// Minimum gap between aligned columns.
    #[builder(default = "2")]
    #[serde(default = "default_padding")]
    pub padding: usize,
}

fn default_true() -> bool {
    true
}

fn default_padding() -> usize {
    2
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.padding == Some(0) {
            return Err("Column padding must be at least 1".to_string());
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Create a terse config with headers, aged against now.
    pub fn new() -> Self {
        Self {
            detail: Detail::Terse,
            show_headers: true,
            reference_time: Utc::now(),
            padding: 2,
        }
    }

    /// Check if the detailed column set is selected.
    pub fn is_detailed(&self) -> bool {
        self.detail == Detail::Detailed
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
