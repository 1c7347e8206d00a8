//! Core domain model for cantoria.
//!
//! This crate defines the song entity model (header, verses, lines and
//! chord/comment segments) consumed by the transcoder, the index
//! record and entry types consumed by the index builder, and the
//! shared error taxonomy.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;

pub use error::{Error, Result};
