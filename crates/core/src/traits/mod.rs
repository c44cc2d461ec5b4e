//! Core traits for the voice shopping system
//!
//! Collaborators outside the interpreter are reached only through these traits:
//! - Pluggable backends (swap implementations without code changes)
//! - Testing with mocks
//!
//! # Trait Hierarchy
//!
//! ```text
//! Storage:
//!   - ShoppingStore: shopping list, purchase history and catalog
//!
//! Time:
//!   - Clock: current calendar month for seasonal rules
//!
//! Speech:
//!   - TranscriptSource: one-shot speech capture yielding a transcript
//! ```

mod clock;
mod speech;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use speech::TranscriptSource;
pub use store::ShoppingStore;
