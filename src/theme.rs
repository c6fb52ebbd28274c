//! Theme support for the ArborView diagram.
//!
//! Provides color schemes for the tree diagram and its surrounding panels.
//! Includes built-in themes (Light, Dark, Dracula, One Dark Pro) and a
//! centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use arborview::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula edge color: {:?}", dracula.colors.edge);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering panels and diagram elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Diagram colors
    /// Node body fill.
    pub node_fill: Color32,
    /// Node outline stroke.
    pub node_outline: Color32,
    /// Text inside nodes.
    pub node_text: Color32,
    /// Fill for highlighted nodes.
    pub highlight: Color32,
    /// Edge stroke and arrowhead fill (dull gray, theme-dependent).
    pub edge: Color32,
    /// Background grid dot color.
    pub grid_dot: Color32,
    /// Accent color for selected nodes and emphasis.
    pub accent: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new manager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());
        themes.insert("One Dark Pro".to_string(), one_dark_pro_theme());

        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns the palette for the named theme, falling back to Dark.
    pub fn colors(&self, name: &str) -> &ThemeColors {
        self.themes
            .get(name)
            .map(|t| &t.colors)
            .unwrap_or_else(|| &self.themes.get("Dark").unwrap().colors)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with neutral grays".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 250),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            node_fill: Color32::from_rgb(255, 255, 255),
            node_outline: Color32::from_rgb(120, 120, 120),
            node_text: Color32::from_rgb(20, 20, 20),
            highlight: Color32::from_rgb(255, 214, 102),
            // Dull gray on light backgrounds
            edge: hex_to_color32("#555555"),
            grid_dot: hex_to_color32("#555555"),
            accent: Color32::from_rgb(40, 100, 200),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with neutral grays".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(30, 30, 30),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            node_fill: Color32::from_rgb(55, 55, 60),
            node_outline: Color32::from_rgb(150, 150, 150),
            node_text: Color32::from_rgb(240, 240, 240),
            highlight: Color32::from_rgb(241, 196, 15),
            // Dull gray on dark backgrounds
            edge: hex_to_color32("#aaaaaa"),
            grid_dot: hex_to_color32("#aaaaaa"),
            accent: Color32::from_rgb(52, 152, 219),
        },
    }
}

/// Creates the Dracula theme.
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            node_fill: hex_to_color32("#44475a"),
            node_outline: hex_to_color32("#6272a4"),
            node_text: hex_to_color32("#f8f8f2"),
            highlight: hex_to_color32("#50fa7b"),
            edge: hex_to_color32("#aaaaaa"),
            grid_dot: hex_to_color32("#6272a4"),
            accent: hex_to_color32("#bd93f9"),
        },
    }
}

/// Creates the One Dark Pro theme.
///
/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282c34"),
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),

            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),

            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),

            node_fill: hex_to_color32("#3b4048"),
            node_outline: hex_to_color32("#5c6370"),
            node_text: hex_to_color32("#abb2bf"),
            highlight: hex_to_color32("#e5c07b"),
            edge: hex_to_color32("#aaaaaa"),
            grid_dot: hex_to_color32("#5c6370"),
            accent: hex_to_color32("#61afef"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
