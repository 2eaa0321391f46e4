//! Fuzz target for feed decoding.
//!
//! Tests that decoding the remote document handles arbitrary input without
//! panicking.

#![no_main]

use ft_common::Feed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return an error
    let _ = Feed::from_slice(data);
});
