//! TGS CLI library.
//!
//! Rendering helpers for the `tgs-cli` binary, kept in a library so they can
//! be unit tested without spawning the process.

pub mod output;
