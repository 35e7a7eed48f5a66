use socket_errors::{errno::Fixed, FailureKind, SocketError};

fn main() {
    tracing_subscriber::fmt::init();

    let failures = [
        (FailureKind::AcceptFailed, libc::EINVAL),
        (FailureKind::ListenFailed, libc::EDESTADDRREQ),
        (FailureKind::connect_failed("tcp", "example.com", 443), libc::ECONNREFUSED),
        (FailureKind::SelectFailed { reads: vec![3, 4], writes: vec![5], errors: vec![] }, libc::EBADF),
        (FailureKind::UnsupportedSocketAddressFamily(libc::AF_APPLETALK), libc::EAFNOSUPPORT),
    ];

    for (kind, code) in failures {
        let err = SocketError::with_os_error_source(kind, &Fixed(code));
        println!("[{}] {err}", err.identifier());
        for cause in err.possible_causes() {
            println!("    possible cause: {cause}");
        }
        for fix in err.suggested_fixes() {
            println!("    suggested fix: {fix}");
        }
    }

    let err = SocketError::message("handshake rejected by peer");
    println!("[{}] {err} (os error code {})", err.identifier(), err.os_error_code());
}
