//! Domain model types.

pub mod account;
pub mod catalog;
pub mod client;
pub mod lab;
pub mod order;
pub mod session;

pub use account::Account;
pub use catalog::{Item, ItemType};
pub use client::Client;
pub use lab::LabMember;
pub use order::{OrderItem, OrderWithItem};
pub use session::{CurrentUser, keys as session_keys};
