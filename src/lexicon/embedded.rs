//! Embedded lexicon
//!
//! Corpus and score table compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
include!(concat!(env!("OUT_DIR"), "/scores.rs"));
