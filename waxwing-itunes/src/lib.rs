//! A barebones client for the iTunes lookup API.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod lookup;
pub use lookup::*;

mod track;
pub use track::*;

mod preview;
