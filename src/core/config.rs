use crate::core::{LightsOutError, CHANCE_LIGHT_STARTS_ON, NCOLS, NROWS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub nrows: usize,
    pub ncols: usize,
    pub chance_light_starts_on: f64,
    /// Seed for the starting board; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            nrows: NROWS,
            ncols: NCOLS,
            chance_light_starts_on: CHANCE_LIGHT_STARTS_ON,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        GameConfig { seed, ..self }
    }

    pub fn validate(&self) -> Result<(), LightsOutError> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(LightsOutError::ZeroDimension);
        }
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(LightsOutError::ChanceOutOfRange(self.chance_light_starts_on));
        }
        Ok(())
    }
}
