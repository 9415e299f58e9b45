//! Tessera Studio - visual builder for styled HTML buttons
//!
//! The window has two panels:
//!
//! 1. **Options**: label, colours and counting inputs for every size,
//!    with press-and-hold stepping and over-limit warnings.
//!
//! 2. **Output**: a live preview, the generated markup, Export, which
//!    copies the markup to the system clipboard, and Import, which replaces
//!    the form with a style pasted as YAML.

pub mod clipboard;
pub mod config;
pub mod fields;
pub mod import;
pub mod ui;
