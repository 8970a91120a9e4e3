//! A passcode entry widget: a row of digit slots that masks what is typed and
//! shakes to reject an entry.
//!
//! [`passcode`] holds the toolkit-agnostic engine; [`ui`] hosts it in a
//! ratatui terminal app.

pub mod cli;
pub mod config;
pub mod logging;
pub mod passcode;
pub mod shutdown;
pub mod ui;
