//! Server-side HTML rendering (maud, auto-escaped).

pub mod layout;
pub mod products;
