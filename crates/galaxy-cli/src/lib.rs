//! Terminal front end for Math Galaxy.
//!
//! The binary wires these pieces together: [`router::Router`] holds the
//! active mode and table, [`views`] render each mode, [`repl`] parses what
//! the player types, and [`settings`]/[`logging`] carry the ambient setup.

pub mod logging;
pub mod render;
pub mod repl;
pub mod router;
pub mod settings;
pub mod views;
