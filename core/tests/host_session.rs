//! The process-wide host session.
//!
//! Every test here shares `EmbeddedHost::global()`, so each takes the
//! shared stream lock first.

mod common;

use bart_rn::{EmbeddedHost, HostRn, RandomSource, SeedPair};

#[test]
fn global_returns_one_session() {
    assert!(std::ptr::eq(EmbeddedHost::global(), EmbeddedHost::global()));
}

/// Two adapters on the session are two handles on one stream.
#[test]
fn adapters_share_the_session_stream() {
    let _stream = common::lock_global_stream();
    let host = EmbeddedHost::global();
    let pair = SeedPair::new(555, 777);

    host.set_seed_pair(pair);
    let expected: Vec<f64> = {
        let mut rn = HostRn::new(host);
        (0..6).map(|_| rn.uniform()).collect()
    };

    host.set_seed_pair(pair);
    let mut a = HostRn::new(host);
    let mut b = HostRn::new(host);
    let interleaved: Vec<f64> = (0..3).flat_map(|_| [a.uniform(), b.uniform()]).collect();
    drop(a);
    drop(b);

    assert_eq!(expected, interleaved);
    assert_eq!(host.scope_depth(), 0);
}

/// A released scope leaves its draws in the session for the next adapter.
#[test]
fn released_scope_persists_in_session() {
    let _stream = common::lock_global_stream();
    let host = EmbeddedHost::global();
    let pair = SeedPair::from_seed(2024);

    host.set_seed_pair(pair);
    let expected: Vec<f64> = {
        let mut rn = HostRn::new(host);
        (0..4).map(|_| rn.normal()).collect()
    };

    host.set_seed_pair(pair);
    let mut resumed: Vec<f64> = {
        let mut rn = HostRn::new(host);
        (0..2).map(|_| rn.normal()).collect()
    };
    {
        let mut rn = HostRn::new(host);
        resumed.extend((0..2).map(|_| rn.normal()));
    }

    assert_eq!(expected, resumed);
}
