//! Print a Pam Can that fits the current terminal.
//!
//! The terminal width comes from a [`terminal::TerminalSizeProvider`]; the
//! widest variant in [`assets::ASSETS`] that fits is decoded by [`render`].

pub mod assets;
pub mod commands;
pub mod logging;
pub mod render;
pub mod terminal;
pub mod theme;
