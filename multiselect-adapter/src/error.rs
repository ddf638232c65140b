/// Errors reported by [`crate::DropdownConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_height must be greater than zero")]
    ZeroMaxHeight,
    #[error("header row height must be greater than zero")]
    ZeroHeaderHeight,
    #[error("option row height must be greater than zero")]
    ZeroOptionHeight,
}
