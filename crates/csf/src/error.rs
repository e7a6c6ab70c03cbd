use thiserror::Error;

/// Invalid parameters handed to the library.
///
/// A curve degenerating during the flow is an expected outcome and is reported
/// through `flow::StepOutcome`, not here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CsfError {
    #[error("invalid step config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid shape params: {reason}")]
    InvalidParams { reason: String },
}

impl CsfError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CsfError>;

/// Target spacings must be finite and positive.
pub(crate) fn check_spacing(spacing: f64) -> Result<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(CsfError::config(format!(
            "spacing must be finite and > 0, got {spacing}"
        )));
    }
    Ok(())
}
