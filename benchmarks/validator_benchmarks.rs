#![allow(clippy::unwrap_used, clippy::panic)]

/// Validator throughput benchmarks: one tight loop per grammar family over a
/// mixed valid/invalid workload, so rejects are measured as well as accepts.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const IPV4_INPUTS: &[&str] = &[
    "192.168.1.1",
    "10.0.0.1",
    "255.255.255.255",
    "256.1.1.1",
    "192.168.01.1",
    "not-an-address",
];

const IPV6_INPUTS: &[&str] = &[
    "::1",
    "2001:db8:85a3::8a2e:370:7334",
    "::ffff:192.0.2.1",
    "fe80::1%eth0",
    "1::2::3",
    "2001:db8:85a3:0:0:8a2e:370:7334:9999",
];

const HOSTNAME_INPUTS: &[&str] = &[
    "example.com",
    "a.very.deep.sub.domain.example.org",
    "xn--bcher-kva.example",
    "-leading.example",
    "double..dot.example",
];

const ENDPOINT_INPUTS: &[&str] = &[
    "[::1]:80",
    "[2001:db8::1]:8443",
    "192.168.1.1:8080",
    "example.com:443",
    "host:80:443",
    "999.1.1.1:80",
];

const DATE_TIME_INPUTS: &[&str] = &[
    "2025-11-29T14:30:00Z",
    "2025-11-29T23:59:60+09:00",
    "2025-04-31T00:00:00Z",
    "2025-11-29 14:30:00Z",
];

const URI_INPUTS: &[&str] = &[
    "https://example.com/path/to/resource?query=value#fragment",
    "urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66",
    "http://exa mple.com",
    "no-scheme-at-all",
];

fn bench_validators(c: &mut Criterion) {
    c.bench_function("is_ipv4", |b| {
        b.iter(|| {
            for input in IPV4_INPUTS {
                black_box(netgram::is_ipv4(black_box(input)));
            }
        });
    });

    c.bench_function("is_ipv6", |b| {
        b.iter(|| {
            for input in IPV6_INPUTS {
                black_box(netgram::is_ipv6(black_box(input)));
            }
        });
    });

    c.bench_function("is_hostname", |b| {
        b.iter(|| {
            for input in HOSTNAME_INPUTS {
                black_box(netgram::is_hostname(black_box(input)));
            }
        });
    });

    c.bench_function("parse_endpoint", |b| {
        b.iter(|| {
            for input in ENDPOINT_INPUTS {
                black_box(netgram::parse_endpoint(black_box(input)).ok());
            }
        });
    });

    c.bench_function("is_date_time", |b| {
        b.iter(|| {
            for input in DATE_TIME_INPUTS {
                black_box(netgram::is_date_time(black_box(input)));
            }
        });
    });

    c.bench_function("is_uri", |b| {
        b.iter(|| {
            for input in URI_INPUTS {
                black_box(netgram::is_uri(black_box(input)));
            }
        });
    });

    c.bench_function("is_uuid", |b| {
        b.iter(|| {
            black_box(netgram::is_uuid(black_box(
                "550e8400-e29b-41d4-a716-446655440000",
            )));
        });
    });
}

criterion_group!(benches, bench_validators);
criterion_main!(benches);
