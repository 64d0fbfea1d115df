use anyhow::Error;
use std::fmt;

/// Failure classes a command can end in.
///
/// The kind decides how the binary reports the failure and which exit code it
/// uses; the wrapped [`anyhow::Error`] carries the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A uniqueness constraint rejected the write.
    AlreadyExists,
    /// The addressed row does not exist.
    NotFound,
    /// An update command was invoked without any field option.
    NothingToUpdate,
    /// Input failed a presence or format check.
    BadRequest,
    /// The database reported a failure.
    Database,
    /// Anything else.
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn already_exists<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::AlreadyExists, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Database, err)
    }

    /// Builds the "nothing to update" outcome, naming the options the
    /// command accepts (e.g. `"--name/--email/--password"`).
    pub fn nothing_to_update(options: &str) -> Self {
        Self::new(
            ErrorKind::NothingToUpdate,
            anyhow::anyhow!("Nothing to update. Use {}.", options),
        )
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Process exit code for this failure.
    ///
    /// `NothingToUpdate` is a usage problem and exits with 2; every other
    /// failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::NothingToUpdate => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
