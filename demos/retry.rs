use socket_errors::{utils::{retry_on_interrupt, setsockopt}, FailureKind, SocketError};

use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).init();

    let hostname = std::env::args().nth(1).unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = std::env::args().nth(2).map(|p| p.parse().unwrap()).unwrap_or(0);

    if let Err(err) = serve_once(hostname, port) {
        println!("error:      {err}");
        println!("identifier: {}", err.identifier());
        if let Some(os_error) = err.os_error() {
            println!("os error:   {os_error}");
        }
        for cause in err.possible_causes() {
            println!("  possible cause: {cause}");
        }
    }
}

/// Accept a single TCP client and print what it sends
fn serve_once(hostname: String, port: u16) -> Result<(), SocketError> {
    let address: std::net::Ipv4Addr = hostname.parse()
        .map_err(|_| SocketError::without_os_error(FailureKind::IpAddressValidationFailed(hostname.clone())))?;

    // create socket
    let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_STREAM, 0) };
    if fd < 0 {
        return Err(SocketError::new(FailureKind::CreateSocketFailed));
    }
    let listener = unsafe { OwnedFd::from_raw_fd(fd) };
    setsockopt(listener.as_raw_fd(), libc::SOL_SOCKET, libc::SO_REUSEADDR, &(1 as libc::c_int))?;

    // bind
    let mut local = libc::sockaddr_in {
        sin_family: libc::AF_INET as _,
        sin_port: port.to_be(),
        sin_addr: libc::in_addr { s_addr: u32::from(address).to_be() },
        sin_zero: [0; 8],
    };
    let mut local_len = std::mem::size_of::<libc::sockaddr_in>() as libc::socklen_t;
    if unsafe { libc::bind(listener.as_raw_fd(), &local as *const _ as *const _, local_len) } < 0 {
        return Err(SocketError::new(FailureKind::BindFailed));
    }

    // listen
    retry_on_interrupt(|| {
        if unsafe { libc::listen(listener.as_raw_fd(), 1) } < 0 {
            Err(SocketError::new(FailureKind::ListenFailed))
        } else {
            Ok(())
        }
    })?;
    if unsafe { libc::getsockname(listener.as_raw_fd(), &mut local as *mut _ as *mut _, &mut local_len) } < 0 {
        return Err(SocketError::new(FailureKind::LocalAddressResolutionFailed));
    }
    println!("listening on tcp://{hostname}:{}", u16::from_be(local.sin_port));

    // accept
    let client = retry_on_interrupt(|| {
        let fd = unsafe { libc::accept(listener.as_raw_fd(), std::ptr::null_mut(), std::ptr::null_mut()) };
        if fd < 0 {
            Err(SocketError::new(FailureKind::AcceptFailed))
        } else {
            Ok(unsafe { OwnedFd::from_raw_fd(fd) })
        }
    })?;

    // read until the client hangs up
    let mut buffer = [0_u8; 1024];
    loop {
        let read = retry_on_interrupt(|| {
            let ret = unsafe { libc::read(client.as_raw_fd(), buffer.as_mut_ptr().cast(), buffer.len()) };
            if ret < 0 {
                Err(SocketError::new(FailureKind::ReadFailed))
            } else {
                Ok(ret as usize)
            }
        })?;
        if read == 0 {
            return Ok(());
        }
        println!("Received: {:?}", String::from_utf8_lossy(&buffer[..read]));
    }
}
