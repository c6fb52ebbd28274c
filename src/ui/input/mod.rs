//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Diagram input handling (pan, zoom, cursor tracking)
//! - Mouse interactions

pub mod diagram_input_handler;
