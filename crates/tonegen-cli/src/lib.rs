//! Tonegen CLI library.
//!
//! This crate provides the command implementations behind the `tonegen`
//! binary: synthesize a tone or sweep, encode it as a WAV file, and write it
//! to disk.

pub mod commands;
