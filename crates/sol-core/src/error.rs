use thiserror::Error;

/// Chain-level operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// No bump in 255..=0 produced an off-curve candidate for the given
    /// seeds. Fatal for the caller: retrying with the same seeds can never
    /// succeed.
    #[error("exhausted bump seeds for seed list [{seeds}]")]
    ExhaustedBumpSeeds { seeds: String },

    #[error("transaction build error: {0}")]
    TransactionBuild(String),

    #[error("signing error: {0}")]
    Signing(String),
}
