//! GreenMarket Core - Shared types library.
//!
//! This crate provides common types used across all GreenMarket components:
//! - `storefront` - Public-facing grocery store site
//! - `cli` - Command-line tools for migrations, seeding, and stock management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, emails,
//!   cities, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
