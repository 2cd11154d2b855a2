#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Balance factor too small: {} (min: {})", factor, min)]
    BalanceFactorTooSmall { factor: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    #[error("Invalid config")]
    Config(#[source] ConfigError),

    #[error("Length mismatch: expected {}, got {}", expected, actual)]
    LengthMismatch { expected: usize, actual: usize },
}

impl From<ConfigError> for SeqError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
