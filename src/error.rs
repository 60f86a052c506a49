// Error types module

use thiserror::Error;

use crate::constants::INVALID_REF_LINK_MESSAGE;

/// Centralized error type for the banner engine
///
/// `InvalidReferralLink` is the only validation failure; it is recovered by
/// the save pipeline and surfaced through the notice queue. The remaining
/// variants are infrastructure failures reported to the caller.
#[derive(Error, Debug)]
pub enum BannerError {
    /// Submitted referral link does not contain a valid referral URL
    #[error("{}", INVALID_REF_LINK_MESSAGE)]
    InvalidReferralLink,

    /// Configuration errors (invalid YAML, missing env vars, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings store could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BannerError {
    /// Whether this error is a user input problem rather than an
    /// infrastructure failure
    pub fn is_validation(&self) -> bool {
        matches!(self, BannerError::InvalidReferralLink)
    }
}
