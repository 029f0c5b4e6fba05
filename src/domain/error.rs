//! Domain error types.
//!
//! Every rejected operation surfaces one of these to the immediate caller;
//! nothing is caught and logged away inside the domain.

use crate::domain::estate_state::EstateAction;
use crate::domain::funds::Funds;

/// Top-level error type for tycoon.
#[derive(Debug, thiserror::Error)]
pub enum TycoonError {
    #[error("insufficient funds: {required} required, {available} available")]
    InsufficientFunds { required: Funds, available: Funds },

    #[error("funds amount cannot be negative: {amount}")]
    InvalidFunds { amount: i64 },

    #[error("estate '{estate}' is not owned, cannot {action}")]
    EstateNotOwned { estate: String, action: EstateAction },

    #[error("estate '{estate}' is already owned")]
    EstateAlreadyOwned { estate: String },

    #[error("estate '{estate}' must be in the right mortgage state to {action}")]
    EstateMortgaged { estate: String, action: EstateAction },

    #[error("only the owner of '{estate}' can {action}")]
    EstatePermission { estate: String, action: EstateAction },

    #[error("estate '{estate}' belongs to a category that cannot carry stars")]
    EstateNotBuildable { estate: String },

    #[error("maximum number of stars ({max_stars}) reached on '{estate}'")]
    MaxStarsReached { estate: String, max_stars: u8 },

    #[error("trade difference exceeded: giving {given}, receiving {received}")]
    TradeDifferenceExceeded { given: Funds, received: Funds },

    #[error("a trade must include at least one estate")]
    TradeMustIncludeAtLeastOneEstate,

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TycoonError> for std::process::ExitCode {
    fn from(err: &TycoonError) -> Self {
        let code: u8 = match err {
            TycoonError::Io(_) => 1,
            TycoonError::ConfigParse { .. }
            | TycoonError::ConfigMissing { .. }
            | TycoonError::ConfigInvalid { .. } => 2,
            TycoonError::InsufficientFunds { .. } | TycoonError::InvalidFunds { .. } => 3,
            TycoonError::EstateNotOwned { .. }
            | TycoonError::EstateAlreadyOwned { .. }
            | TycoonError::EstateMortgaged { .. }
            | TycoonError::EstatePermission { .. }
            | TycoonError::EstateNotBuildable { .. }
            | TycoonError::MaxStarsReached { .. } => 4,
            TycoonError::TradeDifferenceExceeded { .. }
            | TycoonError::TradeMustIncludeAtLeastOneEstate => 5,
        };
        std::process::ExitCode::from(code)
    }
}
