//! Core type definitions for KidConnect.

pub mod delivery;
pub mod recipient;
pub mod schedule;

pub use delivery::*;
pub use recipient::*;
pub use schedule::*;
