//! Configuration for grid filling.

use serde::{Deserialize, Serialize};

/// Configuration for nearest-valid filling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    /// Maximum search distance in cells. Invalid cells farther than this
    /// from any valid cell are left as NaN. `None` fills everything.
    pub max_distance: Option<f64>,
}

impl FillConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FILL_MAX_DISTANCE") {
            if let Ok(distance) = val.parse() {
                config.max_distance = Some(distance);
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(distance) = self.max_distance {
            if distance.is_nan() || distance < 0.0 {
                return Err("max_distance must be >= 0".to_string());
            }
        }

        Ok(())
    }
}
