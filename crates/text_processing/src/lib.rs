//! Transcript Interpreter for the Voice Shopping Assistant
//!
//! Turns a raw speech transcript into a structured [`Command`]:
//! - **Normalization**: lower-case the transcript
//! - **Intent Detection**: ADD / REMOVE / SEARCH / UNKNOWN by keyword group priority
//! - **Slot Extraction**: quantity, price ceiling, sort directive, brand
//! - **Item Name Extraction**: ordered stripping pipeline leaving the residual item
//!
//! Every stage is a pure function of the transcript. No input makes the
//! interpreter fail; an empty transcript yields an UNKNOWN command with an
//! empty item.
//!
//! # Example
//!
//! ```
//! use voice_cart_text_processing::parse_command;
//! use voice_cart_core::Intent;
//!
//! let command = parse_command("add 3 dove soap");
//! assert_eq!(command.intent, Intent::Add);
//! assert_eq!(command.quantity, 3);
//! assert_eq!(command.brand.as_deref(), Some("dove"));
//! assert_eq!(command.item, "soap");
//! ```

pub mod intent;
pub mod item_name;
pub mod normalize;
pub mod parser;
pub mod slot_extraction;
pub mod vocabulary;

pub use intent::{classify_intent, IntentClassifier};
pub use item_name::{ItemNameExtractor, StripStage};
pub use normalize::normalize;
pub use parser::{parse_command, CommandParser};
pub use slot_extraction::{extract_price, extract_quantity, SlotExtractor};

pub use voice_cart_core::{Command, Intent, SortOrder};
