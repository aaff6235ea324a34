use crate::config::MultiplierBandConfig;
use crate::LookupError;
use serde::Serialize;

/// One step of the 2014 encounter multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiplierBand {
    pub max_monsters: i32,
    pub multiplier: f64,
}

/// Bands ordered ascending by `max_monsters`, never empty
#[derive(Debug, Clone)]
pub struct MultiplierBands {
    bands: Vec<MultiplierBand>,
}

impl MultiplierBands {
    /// Build from literal bands already known to be valid
    pub(crate) fn from_literal(bands: &[(i32, f64)]) -> Self {
        MultiplierBands {
            bands: bands
                .iter()
                .map(|&(max_monsters, multiplier)| MultiplierBand {
                    max_monsters,
                    multiplier,
                })
                .collect(),
        }
    }

    /// Parse bands from config, rejecting empty or unordered tables
    pub(crate) fn from_config(config: Vec<MultiplierBandConfig>) -> Result<Self, String> {
        if config.is_empty() {
            return Err("at least one multiplier band is required".to_string());
        }

        let mut bands: Vec<MultiplierBand> = Vec::with_capacity(config.len());
        for band in config {
            if band.max_monsters < 1 {
                return Err(format!(
                    "multiplier band max_monsters must be at least 1, got {}",
                    band.max_monsters
                ));
            }
            if band.multiplier.is_nan() || band.multiplier <= 0.0 {
                return Err(format!(
                    "multiplier for band {} must be positive, got {}",
                    band.max_monsters, band.multiplier
                ));
            }
            if let Some(previous) = bands.last() {
                if band.max_monsters <= previous.max_monsters {
                    return Err(format!(
                        "multiplier bands must be strictly ascending: {} follows {}",
                        band.max_monsters, previous.max_monsters
                    ));
                }
            }
            bands.push(MultiplierBand {
                max_monsters: band.max_monsters,
                multiplier: band.multiplier,
            });
        }

        Ok(MultiplierBands { bands })
    }

    /// Multiplier of the first band covering `num_monsters`
    ///
    /// Counts beyond the last band clamp to its multiplier.
    pub fn multiplier_for(&self, num_monsters: i32) -> Result<f64, LookupError> {
        if num_monsters < 1 {
            return Err(LookupError::InvalidMonsterCount(num_monsters));
        }

        let band = self
            .bands
            .iter()
            .find(|band| num_monsters <= band.max_monsters)
            .or_else(|| self.bands.last());

        band.map(|b| b.multiplier)
            .ok_or(LookupError::InvalidMonsterCount(num_monsters))
    }

    pub fn bands(&self) -> &[MultiplierBand] {
        &self.bands
    }
}
