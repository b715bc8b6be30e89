//! Embedded dictionary
//!
//! Word list compiled into the binary at build time.

// Generated from data/words.txt by the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
