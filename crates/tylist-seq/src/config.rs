use crate::error::ConfigError;

/// Configuration for [`Seq`](crate::Seq)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeqConfig {
    /// how far the heights of two sibling subtrees may drift apart before a rotation: `1` keeps
    /// the tree strictly AVL-balanced, larger values rotate less often and let it grow deeper
    #[cfg_attr(feature = "serde", serde(default = "defaults::default_balance_factor"))]
    pub balance_factor: usize,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self { balance_factor: defaults::default_balance_factor() }
    }
}

impl SeqConfig {
    pub const MIN_BALANCE_FACTOR: usize = 1;

    pub fn new(balance_factor: usize) -> Result<Self, ConfigError> {
        let config = Self { balance_factor };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.balance_factor < Self::MIN_BALANCE_FACTOR {
            return Err(ConfigError::BalanceFactorTooSmall {
                factor: self.balance_factor,
                min: Self::MIN_BALANCE_FACTOR,
            })
        }
        Ok(())
    }
}

mod defaults {
    pub(super) const DEFAULT_BALANCE_FACTOR: usize = 1;

    pub(super) fn default_balance_factor() -> usize {
        DEFAULT_BALANCE_FACTOR
    }
}
