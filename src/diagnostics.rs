use crate::FailureKind;

impl FailureKind {
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Stable token naming the variant, payload is ignored
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::CreateSocketFailed => "create_socket_failed",
            Self::CloseSocketFailed => "close_socket_failed",
            Self::PipeCreationFailed => "pipe_creation_failed",
            Self::OptionSetFailed { .. } => "option_set_failed",
            Self::OptionGetFailed { .. } => "option_get_failed",
            Self::SelectFailed { .. } => "select_failed",
            Self::LocalAddressResolutionFailed => "local_address_resolution_failed",
            Self::RemoteAddressResolutionFailed => "remote_address_resolution_failed",
            Self::IpAddressResolutionFailed => "ip_address_resolution_failed",
            Self::IpAddressValidationFailed(_) => "ip_address_validation_failed",
            Self::FailedToGetIpFromHostname(_) => "failed_to_get_ip_from_hostname",
            Self::UnparsableBytes => "unparsable_bytes",
            Self::ConnectFailed { .. } => "connect_failed",
            Self::ConnectTimedOut => "connect_timed_out",
            Self::BindFailed => "bind_failed",
            Self::ListenFailed => "listen_failed",
            Self::AcceptFailed => "accept_failed",
            Self::ReadFailed => "read_failed",
            Self::WriteFailed => "write_failed",
            Self::UnsupportedSocketAddressFamily(_) => "unsupported_socket_address_family",
            Self::ConcreteSocketAddressFamilyRequired => "concrete_socket_address_family_required",
            Self::SocketIsClosed => "socket_is_closed",
            Self::Generic(_) => "generic",
        }
    }

    pub const fn possible_causes(&self) -> &'static [&'static str] {
        match self {
            Self::AcceptFailed => &[
                "`bind` has not been called first",
                "`listen` has not been called first",
            ],
            Self::ListenFailed => &[
                "`bind` has not been called first",
            ],
            Self::ConnectFailed { .. } => &[
                "The hostname or port is not valid",
            ],
            Self::CreateSocketFailed
            | Self::CloseSocketFailed
            | Self::PipeCreationFailed
            | Self::OptionSetFailed { .. }
            | Self::OptionGetFailed { .. }
            | Self::SelectFailed { .. }
            | Self::LocalAddressResolutionFailed
            | Self::RemoteAddressResolutionFailed
            | Self::IpAddressResolutionFailed
            | Self::IpAddressValidationFailed(_)
            | Self::FailedToGetIpFromHostname(_)
            | Self::UnparsableBytes
            | Self::ConnectTimedOut
            | Self::BindFailed
            | Self::ReadFailed
            | Self::WriteFailed
            | Self::UnsupportedSocketAddressFamily(_)
            | Self::ConcreteSocketAddressFamilyRequired
            | Self::SocketIsClosed
            | Self::Generic(_) => &[],
        }
    }

    // none populated yet
    pub const fn suggested_fixes(&self) -> &'static [&'static str] {
        match self {
            Self::CreateSocketFailed
            | Self::CloseSocketFailed
            | Self::PipeCreationFailed
            | Self::OptionSetFailed { .. }
            | Self::OptionGetFailed { .. }
            | Self::SelectFailed { .. }
            | Self::LocalAddressResolutionFailed
            | Self::RemoteAddressResolutionFailed
            | Self::IpAddressResolutionFailed
            | Self::IpAddressValidationFailed(_)
            | Self::FailedToGetIpFromHostname(_)
            | Self::UnparsableBytes
            | Self::ConnectFailed { .. }
            | Self::ConnectTimedOut
            | Self::BindFailed
            | Self::ListenFailed
            | Self::AcceptFailed
            | Self::ReadFailed
            | Self::WriteFailed
            | Self::UnsupportedSocketAddressFamily(_)
            | Self::ConcreteSocketAddressFamilyRequired
            | Self::SocketIsClosed
            | Self::Generic(_) => &[],
        }
    }
}
