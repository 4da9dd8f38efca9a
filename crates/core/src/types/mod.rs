//! Core types for GreenMarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod city;
pub mod email;
pub mod id;
pub mod status;
pub mod username;

pub use city::{City, CityError};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::OrderStatus;
pub use username::{Username, UsernameError};
