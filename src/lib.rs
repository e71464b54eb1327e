//! tsmerge - merge translations between Qt Linguist `.ts` files
//!
//! tsmerge is a CLI tool and library that copies translations from a
//! reference `.ts` file into target `.ts` files, matching messages by context
//! name and source text. When the source text has only drifted in whitespace
//! (re-wrapped lines, changed indentation), a normalized fallback key still
//! finds the translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, index, and merge engine
//! - `ts_editor`: File-level open / merge / save
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod ts_editor;
pub mod utils;
