//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for ArborView:
//! - Header panel (file controls, zoom, playback, theme selector)
//! - Diagram panel (tree canvas with pan and zoom)
//! - Status bar (snapshot metadata display)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (mouse interactions)

pub mod diagram_panel;
pub mod header;
pub mod input;
pub mod panel_manager;
pub mod status_bar;
