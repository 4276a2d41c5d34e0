use thiserror::Error;

/// Errors raised while turning configuration text into style values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("invalid color `{0}` (expected #rgb, #rrggbb, #rrggbbaa or transparent)")]
    InvalidColor(String),

    #[error("unknown style attribute `{0}`")]
    UnknownAttribute(String),
}
