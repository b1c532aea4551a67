use thiserror::Error;

/// Alias for `Result<T, SignupError>`.
pub type SignupResult<T> = Result<T, SignupError>;

/// Rejections produced by sign-up operations.
///
/// Every variant is recoverable: a rejected call leaves all state
/// unchanged, and the message is suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// Registration attempted with a blank or whitespace-only name.
    #[error("name cannot be empty")]
    EmptyName,

    /// The name is already on the roster (names compare case-insensitively).
    #[error("\"{0}\" is already registered")]
    DuplicateName(String),

    /// The requested slot id does not exist on the sheet.
    #[error("no slot with id {0}")]
    UnknownSlot(u32),

    /// The requested slot already has an occupant.
    #[error("slot {0} is already taken")]
    SlotTaken(u32),

    /// The roster cannot change while a duty draw is running.
    #[error("a duty draw is in progress")]
    DrawInProgress,
}
