//! Embedded word data
//!
//! Word set and accepted list compiled into the binary at build time.

// Include generated word data from build script
include!(concat!(env!("OUT_DIR"), "/word_set.rs"));
include!(concat!(env!("OUT_DIR"), "/accepted.rs"));
