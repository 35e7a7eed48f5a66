pub type Port = u16;

/// What went wrong at the socket layer, displayed as its reason
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    // lifecycle
    #[error("Failed to create a socket")] CreateSocketFailed,
    #[error("Failed to close the socket")] CloseSocketFailed,
    #[error("Failed to create a pipe")] PipeCreationFailed,

    // configuration
    #[error("Option set failed (level = {level}, name = {name}, value = {value})")] OptionSetFailed { level: libc::c_int, name: libc::c_int, value: String },
    #[error("Option get failed (level = {level}, name = {name}, type = {expected_type})")] OptionGetFailed { level: libc::c_int, name: libc::c_int, expected_type: String },

    // multiplexing
    #[error("Select failed (reads = {reads:?}, writes = {writes:?}, errors = {errors:?})")] SelectFailed { reads: Vec<libc::c_int>, writes: Vec<libc::c_int>, errors: Vec<libc::c_int> },

    // address resolution
    #[error("Failed to resolve a local address")] LocalAddressResolutionFailed,
    #[error("Failed to resolve a remote address")] RemoteAddressResolutionFailed,
    #[error("Failed to resolve an IP address")] IpAddressResolutionFailed,
    #[error("IP address validation failed: {0}")] IpAddressValidationFailed(String),
    #[error("Failed to get IP from hostname: {0}")] FailedToGetIpFromHostname(String),
    #[error("Encountered unparsable bytes")] UnparsableBytes,

    // connection lifecycle
    #[error("Failed trying to connect to {scheme}://{hostname}:{port}")] ConnectFailed { scheme: String, hostname: String, port: Port },
    #[error("Connection timed out")] ConnectTimedOut,
    #[error("Failed trying to bind to the address")] BindFailed,
    #[error("Failed trying to start listening on the socket")] ListenFailed,
    #[error("Failed trying to accept a new connection")] AcceptFailed,
    #[error("Failed trying to read from socket")] ReadFailed,
    #[error("Failed trying to write to socket")] WriteFailed,

    // address family
    #[error("Unsupported socket address family {0}")] UnsupportedSocketAddressFamily(libc::c_int),
    #[error("Concrete socket address family required")] ConcreteSocketAddressFamilyRequired,

    // state
    #[error("Socket is closed")] SocketIsClosed,

    // escape hatch
    #[error("{0}")] Generic(String),
}
impl FailureKind {
    pub fn connect_failed(scheme: impl Into<String>, hostname: impl Into<String>, port: Port) -> Self {
        Self::ConnectFailed { scheme: scheme.into(), hostname: hostname.into(), port }
    }

    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }
}
impl From<String> for FailureKind {
    fn from(message: String) -> Self {
        Self::Generic(message)
    }
}
impl From<&str> for FailureKind {
    fn from(message: &str) -> Self {
        Self::Generic(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FailureKind;

    #[test]
    fn connect_reason_renders_url() {
        let kind = FailureKind::connect_failed("tcp", "example.com", 443);
        assert!(kind.to_string().contains("tcp://example.com:443"));
    }

    #[test]
    fn option_reasons_contain_payload() {
        let set = FailureKind::OptionSetFailed { level: libc::SOL_SOCKET, name: libc::SO_REUSEADDR, value: "true".into() };
        let rendered = set.to_string();
        assert!(rendered.contains(&libc::SOL_SOCKET.to_string()));
        assert!(rendered.contains(&libc::SO_REUSEADDR.to_string()));
        assert!(rendered.contains("true"));

        let get = FailureKind::OptionGetFailed { level: 6, name: 1, expected_type: "i32".into() };
        assert_eq!(get.to_string(), "Option get failed (level = 6, name = 1, type = i32)");
    }

    #[test]
    fn select_reason_lists_descriptors() {
        let kind = FailureKind::SelectFailed { reads: vec![3, 4], writes: vec![], errors: vec![7] };
        assert_eq!(kind.to_string(), "Select failed (reads = [3, 4], writes = [], errors = [7])");
    }

    #[test]
    fn generic_reason_is_message() {
        assert_eq!(FailureKind::from("boom").to_string(), "boom");
        assert!(FailureKind::from("boom".to_string()).is_generic());
        assert!(!FailureKind::BindFailed.is_generic());
    }
}
