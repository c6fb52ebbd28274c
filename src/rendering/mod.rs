//! Rendering subsystem for drawing the tree diagram
//!
//! This module contains all rendering logic for the ArborView canvas:
//! - Node rendering (labeled circles with highlight and selection states)
//! - Edge rendering (straight connectors with arrowheads, animated dashes)
//! - Background grid rendering (world-anchored dotted grid)

pub mod edge_renderer;
pub mod grid_renderer;
pub mod node_renderer;
