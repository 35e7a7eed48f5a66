use std::os::fd::AsRawFd;

use crate::{FailureKind, SocketError};

/// Run `operation` until it either succeeds or fails for a reason other than a signal interruption
///
/// Do not wrap `connect` with this: an interrupted connect keeps going in the background.
pub fn retry_on_interrupt<T>(mut operation: impl FnMut() -> Result<T, SocketError>) -> Result<T, SocketError> {
    let mut attempt = 0_usize;
    loop {
        match operation() {
            Err(err) if err.is_interrupted() => {
                attempt += 1;
                tracing::trace!(attempt, identifier = err.identifier(), "interrupted, retrying");
            }
            result => return result,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A plain-data socket option value: every bit pattern the kernel may write is a valid value
///
/// ```compile_fail
/// let _ = socket_errors::utils::getsockopt::<bool>(0, 1, 3);
/// ```
pub trait SockOpt: sealed::Sealed + Sized {
    fn describe(&self) -> String;
}

impl sealed::Sealed for libc::c_int {}
impl SockOpt for libc::c_int {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl sealed::Sealed for libc::c_uint {}
impl SockOpt for libc::c_uint {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl sealed::Sealed for libc::linger {}
impl SockOpt for libc::linger {
    fn describe(&self) -> String {
        format!("linger {{ l_onoff: {}, l_linger: {} }}", self.l_onoff, self.l_linger)
    }
}

impl sealed::Sealed for libc::timeval {}
impl SockOpt for libc::timeval {
    fn describe(&self) -> String {
        format!("timeval {{ tv_sec: {}, tv_usec: {} }}", self.tv_sec, self.tv_usec)
    }
}

#[tracing::instrument(skip(socket), level = tracing::Level::TRACE)]
pub fn getsockopt<T: SockOpt>(socket: impl AsRawFd, level: libc::c_int, name: libc::c_int) -> Result<T, SocketError> {
    // get option
    let mut option = std::mem::MaybeUninit::<T>::zeroed();
    let mut option_len = std::mem::size_of::<T>() as libc::socklen_t;
    let result = unsafe { libc::getsockopt(socket.as_raw_fd(), level, name, option.as_mut_ptr() as *mut _, &mut option_len as *mut _) };

    // check result
    if result < 0 {
        return Err(SocketError::new(FailureKind::OptionGetFailed { level, name, expected_type: std::any::type_name::<T>().to_string() }));
    }

    // check length
    if option_len as usize != std::mem::size_of::<T>() {
        return Err(SocketError::message(format!("getsockopt size mismatch (level = {level}, name = {name}, expecting {} received {option_len})", std::mem::size_of::<T>())));
    }

    // T is plain data, any bytes written are a valid value
    Ok(unsafe { option.assume_init() })
}

#[tracing::instrument(skip(socket, value), level = tracing::Level::TRACE)]
pub fn setsockopt<T: SockOpt>(socket: impl AsRawFd, level: libc::c_int, name: libc::c_int, value: &T) -> Result<(), SocketError> {
    let result = unsafe { libc::setsockopt(socket.as_raw_fd(), level, name, value as *const _ as *const libc::c_void, std::mem::size_of::<T>() as libc::socklen_t) };
    if result < 0 {
        Err(SocketError::new(FailureKind::OptionSetFailed { level, name, value: value.describe() }))
    } else {
        Ok(())
    }
}
