//! Mailbox addresses module.

mod address;

pub use address::{Address, AddressError};
