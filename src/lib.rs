//! Weather Hub - a debounced city weather lookup for the terminal
//!
//! The library exposes the widget's modules for testing; `main.rs` wires
//! them to a terminal and the tui-dispatch runtime.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod presentation;
pub mod reducer;
pub mod state;
