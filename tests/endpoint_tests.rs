#![allow(clippy::unwrap_used, clippy::panic)]

/// Endpoint parser integration tests: form disambiguation, sub-view
/// semantics, and the construct-then-reparse round trip.
use netgram::{Endpoint, ParseError, parse_endpoint, parse_port};

#[test]
fn test_disambiguation() {
    let ep = parse_endpoint("[::1]:80").unwrap();
    assert_eq!(ep, Endpoint { host: "::1", port: 80 });

    let ep = parse_endpoint("192.168.1.1:8080").unwrap();
    assert_eq!(
        ep,
        Endpoint {
            host: "192.168.1.1",
            port: 8080
        }
    );

    let ep = parse_endpoint("example.com:443").unwrap();
    assert_eq!(ep.host, "example.com");
    assert_eq!(ep.port, 443);

    // two unbracketed colons are ambiguous
    assert_eq!(parse_endpoint("host:80:443"), Err(ParseError::InvalidEndpoint));
    // a bare IPv6 address needs brackets to carry a port
    assert_eq!(parse_endpoint("::1:80"), Err(ParseError::InvalidEndpoint));
}

#[test]
fn test_host_is_subview_of_input() {
    let input = String::from("[fe80::1%eth0]:8080");
    let ep = parse_endpoint(&input).unwrap();
    assert_eq!(ep.host, "fe80::1%eth0");
    assert_eq!(ep.port, 8080);

    // the host borrows from the input buffer, brackets stripped
    let host_ptr = ep.host.as_ptr() as usize;
    let input_ptr = input.as_ptr() as usize;
    assert_eq!(host_ptr, input_ptr + 1);
}

#[test]
fn test_round_trip() {
    // hostname and IPv4 hosts: host:port
    for (host, port) in [("example.com", 443u16), ("localhost", 0), ("10.0.0.1", 65535)] {
        let text = format!("{host}:{port}");
        let ep = parse_endpoint(&text).unwrap();
        assert_eq!(ep.host, host);
        assert_eq!(ep.port, port);
    }

    // IPv6 hosts: [host]:port
    for (host, port) in [("::1", 80u16), ("2001:db8::1", 8443), ("fe80::1%lo0", 22)] {
        let text = format!("[{host}]:{port}");
        let ep = parse_endpoint(&text).unwrap();
        assert_eq!(ep.host, host);
        assert_eq!(ep.port, port);
    }
}

#[test]
fn test_port_bounds() {
    assert_eq!(parse_port("0"), Some(0));
    assert_eq!(parse_port("65535"), Some(65535));
    assert_eq!(parse_port("65536"), None);
    assert_eq!(parse_port("99999999999999999999"), None);

    assert_eq!(parse_endpoint("example.com:0").unwrap().port, 0);
    assert_eq!(
        parse_endpoint("example.com:65536"),
        Err(ParseError::InvalidPort)
    );
}

#[test]
fn test_failure_taxonomy() {
    // lexical: illegal character in the committed grammar
    assert_eq!(parse_endpoint("exa_mple.com:80"), Err(ParseError::InvalidHost));
    // structural: missing separator or bracket
    assert_eq!(parse_endpoint("example.com"), Err(ParseError::InvalidEndpoint));
    assert_eq!(parse_endpoint("[::1:80"), Err(ParseError::InvalidEndpoint));
    // range: numeric field out of bounds, committed IPv4 included
    assert_eq!(parse_endpoint("300.1.1.1:80"), Err(ParseError::InvalidIpv4));
    assert_eq!(parse_endpoint("example.com:70000"), Err(ParseError::InvalidPort));
}
