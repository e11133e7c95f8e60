/// Domain-level failures, independent of transport.
///
/// The HTTP layer owns the mapping from each variant to a status code and
/// body; see `repotrack_api::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing or malformed client input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No user matched the supplied email / password pair.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// A project with the same link already exists.
    #[error("Link already exists.")]
    DuplicateLink,

    /// A commit history entry referenced a project that does not exist.
    #[error("project_id does not exist")]
    UnknownProject,

    #[error("Internal error: {0}")]
    Internal(String),
}
