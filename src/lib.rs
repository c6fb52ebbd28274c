pub mod tree;
pub mod layout;
pub mod geometry;
pub mod theme;
pub mod snapshot;
pub mod sample;

// Export tree model
pub use tree::TreeNode;

// Export layout computation
pub use layout::{
    layout_tree, child_offset,
    TreeDiagram, RenderNode, RenderEdge, EdgeStyle,
    BASE_SPACING, SPREAD_FACTOR, LEVEL_SPACING,
    EDGE_STROKE_WIDTH, EDGE_OPACITY,
};

// Export edge path geometry
pub use geometry::{straight_path, arrowhead, EdgePath, ARROW_LENGTH, ARROW_HALF_WIDTH};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};

// Export snapshot I/O
pub use snapshot::{read_snapshot, write_snapshot, TreeSnapshot};

// Export demo generation
pub use sample::SampleTreeGenerator;
