//! ArborView GUI Application
//!
//! This module provides an interactive binary tree visualizer built on the
//! egui framework. The viewer features:
//! - Recursive tree layout with depth-shrinking horizontal spacing
//! - Pan and zoom with fit-to-view
//! - Highlight step playback with animated path edges
//! - Asynchronous snapshot loading with loading indicators
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Snapshot loading and demo tree generation
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level rendering for nodes, edges, and the grid
//! - `state/` - State management for the document, camera, and playback

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const STEP_INTERVAL_KEY: &str = "step_interval_ms";

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("ArborView"),
        ..Default::default()
    };

    eframe::run_native(
        "ArborView",
        options,
        Box::new(move |cc| Ok(Box::new(ArborViewApp::new(cc, initial_file)))),
    )
}

/// The main ArborView application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles snapshot loading, playback, and interaction logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct ArborViewApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous snapshot loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for ArborViewApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl ArborViewApp {
    /// Creates a new viewer instance with theme and playback settings loaded
    /// from persistent storage. Optionally accepts an initial file path to
    /// load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let interval_ms: u64 = SettingsCoordinator::load_setting_or(
            cc.storage,
            STEP_INTERVAL_KEY,
            state::DEFAULT_STEP_INTERVAL_MS,
        );

        let mut state = AppState::with_theme(current_theme_name);
        state.playback.set_interval_ms(interval_ms);

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenDemoTreeRequested => {
                ApplicationCoordinator::open_demo_tree(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::NodeClicked {
                node_id,
                was_already_selected,
            } => {
                ApplicationCoordinator::handle_node_click(
                    &mut self.state,
                    node_id,
                    was_already_selected,
                );
            }
        }
    }
}

impl eframe::App for ArborViewApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            STEP_INTERVAL_KEY,
            &self.state.playback.interval_ms(),
        );
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// Delegates to coordinators:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Advance timed playback
    /// 5. Render all panels via PanelManager
    /// 6. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(
                "theme_preference",
                self.state.theme.current_theme_name().to_string(),
            );
            SettingsCoordinator::save_setting(
                storage,
                STEP_INTERVAL_KEY,
                &self.state.playback.interval_ms(),
            );
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Advance timed highlight playback
        ApplicationCoordinator::advance_playback(&mut self.state, ctx);

        // Render all panels and get interaction result
        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
