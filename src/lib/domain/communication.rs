//! Composing, rendering and delivering email messages.

pub mod addresses;
pub mod delivery;
pub mod emails;
pub mod rendering;
