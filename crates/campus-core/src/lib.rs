//! # campus-core
//!
//! Core types, localization, configuration, and error handling for the
//! campus portal.

pub mod config;
pub mod error;
pub mod filter;
pub mod lang;
pub mod listing;
pub mod localize;
pub mod record;
pub mod request;
pub mod traits;
