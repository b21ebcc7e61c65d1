use thiserror::Error;

/// Errors produced while preparing a layout.
///
/// Generation itself is total; the only failure is a configuration that would make the
/// geometry meaningless, and it is reported before any descriptor is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

impl LayoutError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
