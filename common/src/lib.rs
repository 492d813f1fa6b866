//! Shared ordering domain for the frontend and backend crates.
//!
//! Everything here is plain data plus synchronous state transitions, so it
//! runs the same in the browser and in native tests.

pub mod cart;
pub mod catalog;
pub mod model;
pub mod order;
pub mod preview;
