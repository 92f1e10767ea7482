#![cfg_attr(not(feature = "std"), no_std)]

//! Zero-allocation grammar validators for identifiers that recur in
//! networked software: IP addresses, hostnames, ports, endpoints, RFC 3339
//! date/times, ISO 8601 durations, emails, UUIDs, URI/IRI forms, URI
//! Templates, and JSON Pointers.
//!
//! Every validator is a pure single pass over the input with O(1) auxiliary
//! space: no allocation, no normalization, no I/O. Validators answer only
//! "is this grammatically valid"; the endpoint parser additionally borrows
//! the host substring out of its input.

// Internal modules (not public API)
mod character_sets;
mod datetime;
mod email;
mod endpoint;
mod error;
mod host;
mod ipv4;
mod ipv6;
mod json_pointer;
mod scanner;
mod uri;
mod uri_template;
mod uuid;

// Public API
pub use character_sets::{is_uri_reserved, is_uri_unreserved};
pub use datetime::{is_date, is_date_time, is_duration, is_time};
pub use email::{is_email, is_idn_email};
pub use endpoint::{Endpoint, is_port, parse_endpoint, parse_port};
pub use error::ParseError;
pub use host::{is_domain, is_hostname, is_idn_domain, is_idn_hostname};
pub use ipv4::is_ipv4;
pub use ipv6::is_ipv6;
pub use json_pointer::{is_json_pointer, is_relative_json_pointer};
pub use uri::{is_iri, is_iri_reference, is_uri, is_uri_reference};
pub use uri_template::is_uri_template;
pub use uuid::is_uuid;

pub type Result<T> = core::result::Result<T, ParseError>;
