/// Where `SocketError::new` reads its OS error code from
pub trait OsErrorSource {
    fn current(&self) -> libc::c_int;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LastOsError;
impl OsErrorSource for LastOsError {
    fn current(&self) -> libc::c_int {
        last_os_error_code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub libc::c_int);
impl OsErrorSource for Fixed {
    fn current(&self) -> libc::c_int {
        self.0
    }
}

impl<F: Fn() -> libc::c_int> OsErrorSource for F {
    fn current(&self) -> libc::c_int {
        self()
    }
}

/// The calling thread's `errno`, `0` if none is set. Does not clear it.
pub fn last_os_error_code() -> libc::c_int {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
