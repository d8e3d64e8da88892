//! Result record emitted to the host agent
//!
//! The host parses the plugin's stdout as a flat JSON object and stores it as
//! the project's custom metrics.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Version reported in every record
pub const PLUGIN_VERSION: &str = "1.0.1";

/// Status reported in every record
pub const STATUS_OK: &str = "ok";

/// Bounds of the generated metric
pub const METRIC_RANGE: RangeInclusive<u32> = 1..=1000;

/// Flat four-field record. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultRecord {
    /// Pseudo-random sample in [`METRIC_RANGE`]
    #[serde(rename = "custom_metric_A")]
    pub custom_metric_a: u32,
    pub custom_status: String,
    /// Project name exported by the host
    pub processed_for_project: String,
    pub plugin_version: String,
}

impl ResultRecord {
    /// Build a record for `project` around an already chosen metric
    pub fn new(metric: u32, project: impl Into<String>) -> Self {
        Self {
            custom_metric_a: metric,
            custom_status: STATUS_OK.to_string(),
            processed_for_project: project.into(),
            plugin_version: PLUGIN_VERSION.to_string(),
        }
    }

    /// Build a record for `project`, drawing the metric from `rng`
    pub fn generate<R: Rng>(project: impl Into<String>, rng: &mut R) -> Self {
        Self::new(rng.gen_range(METRIC_RANGE), project)
    }
}
