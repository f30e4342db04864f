//! Dialogue Script Module
//!
//! Keyed dialogue content: each key maps to an ordered list of lines.
//! Loaded once at startup from TOML/JSON files and read-only afterwards.

pub mod definition;
pub mod store;

pub use definition::{
    accept_key, decline_key, DialogScript, RawDialogScript, ACCEPT_SUFFIX, DECLINE_SUFFIX,
};
pub use store::ScriptStore;
