/// Errors that can occur during endpoint parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Host side failed its grammar (hostname form)
    InvalidHost,
    /// Port side missing, non-numeric, or out of range
    InvalidPort,
    /// Host side committed to the IPv4 grammar and failed it
    InvalidIpv4,
    /// Bracketed host failed the IPv6 grammar
    InvalidIpv6,
    /// No usable host/port separator, or an ambiguous one
    InvalidEndpoint,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidEndpoint => "Invalid endpoint",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for endpoint parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
