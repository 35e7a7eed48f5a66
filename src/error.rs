use crate::{errno::{LastOsError, OsErrorSource}, FailureKind};

/// A socket-layer failure paired with the OS error code captured when it was detected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", errno_suffix(.os_error_code))]
pub struct SocketError {
    kind: FailureKind,
    os_error_code: libc::c_int,
}
impl SocketError {
    // constants

    /// `errno` of a call interrupted by a signal, which may be retried
    pub const INTERRUPTED_SYSTEM_CALL: libc::c_int = libc::EINTR;

    pub const NO_OS_ERROR: libc::c_int = -1;

    // constructors

    /// Capture the calling thread's `errno` for `kind`
    ///
    /// Call this right after the failing operation, before any other OS call can overwrite `errno`.
    pub fn new(kind: FailureKind) -> Self {
        Self::with_os_error_source(kind, &LastOsError)
    }

    pub fn with_os_error_source(kind: FailureKind, source: &impl OsErrorSource) -> Self {
        Self { kind, os_error_code: source.current() }
    }

    /// For failures the library detects itself, without any OS call involved
    pub fn without_os_error(kind: FailureKind) -> Self {
        Self { kind, os_error_code: Self::NO_OS_ERROR }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::without_os_error(FailureKind::Generic(message.into()))
    }

    // accessors

    pub const fn kind(&self) -> &FailureKind {
        &self.kind
    }

    pub const fn os_error_code(&self) -> libc::c_int {
        self.os_error_code
    }

    /// Whether a real OS error was captured (neither the sentinel nor `0`)
    pub const fn has_os_error(&self) -> bool {
        has_os_error(self.os_error_code)
    }

    pub fn os_error(&self) -> Option<std::io::Error> {
        if self.has_os_error() {
            Some(std::io::Error::from_raw_os_error(self.os_error_code))
        } else {
            None
        }
    }

    pub const fn is_interrupted(&self) -> bool {
        self.os_error_code == Self::INTERRUPTED_SYSTEM_CALL
    }

    // diagnostics

    pub fn reason(&self) -> String {
        self.kind.reason()
    }

    pub const fn identifier(&self) -> &'static str {
        self.kind.identifier()
    }

    pub const fn possible_causes(&self) -> &'static [&'static str] {
        self.kind.possible_causes()
    }

    pub const fn suggested_fixes(&self) -> &'static [&'static str] {
        self.kind.suggested_fixes()
    }

    pub fn into_kind(self) -> FailureKind {
        self.kind
    }
}
impl From<FailureKind> for SocketError {
    fn from(kind: FailureKind) -> Self {
        Self::new(kind)
    }
}
impl From<std::io::Error> for SocketError {
    fn from(error: std::io::Error) -> Self {
        Self {
            os_error_code: error.raw_os_error().unwrap_or(Self::NO_OS_ERROR),
            kind: FailureKind::Generic(error.to_string()),
        }
    }
}
impl From<SocketError> for std::io::Error {
    fn from(error: SocketError) -> Self {
        let kind = match error.os_error() {
            Some(os_error) => os_error.kind(),
            None => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, error)
    }
}

const fn has_os_error(os_error_code: libc::c_int) -> bool {
    os_error_code != SocketError::NO_OS_ERROR && os_error_code != 0
}

fn errno_suffix(os_error_code: &libc::c_int) -> String {
    if has_os_error(*os_error_code) {
        format!(" (errno = {os_error_code})")
    } else {
        String::new()
    }
}
