//! Editor state for UI integration.
//!
//! Holds everything the interactive editor mutates in response to input:
//! the scene, the selection, the clip window, the active mode and the
//! current drawing style. Input is applied synchronously through
//! [`EditorState::dispatch`].

mod input;

pub use input::{InputEvent, SpecialKey};

use clipsketch_core::{Error, Palette, Result, Rgb};
use clipsketch_settings::Config;
use std::fmt;

use crate::clip::ClipWindow;
use crate::model::Point;
use crate::scene::{DrawingObject, Scene, Style};
use crate::selection_manager::SelectionManager;
use crate::transform::Transformation;

/// What a mouse click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Select,
    DrawPoint,
    DrawSegment,
    DrawRectangle,
    DrawEllipse,
    /// Waiting for the first clip corner.
    DefineClipStart,
    /// Waiting for the opposite clip corner.
    DefineClipEnd,
}

impl EditorMode {
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            EditorMode::DrawPoint
                | EditorMode::DrawSegment
                | EditorMode::DrawRectangle
                | EditorMode::DrawEllipse
        )
    }

    pub fn is_defining_clip(&self) -> bool {
        matches!(self, EditorMode::DefineClipStart | EditorMode::DefineClipEnd)
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditorMode::Select => "Select",
            EditorMode::DrawPoint => "Draw Point",
            EditorMode::DrawSegment => "Draw Segment",
            EditorMode::DrawRectangle => "Draw Rectangle",
            EditorMode::DrawEllipse => "Draw Ellipse",
            EditorMode::DefineClipStart => "Define Clip Window (first corner)",
            EditorMode::DefineClipEnd => "Define Clip Window (second corner)",
        };
        f.write_str(label)
    }
}

/// Editor state driven by input events.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub scene: Scene,
    pub selection: SelectionManager,
    pub clip: ClipWindow,
    config: Config,
    mode: EditorMode,
    palette: Palette,
    color: Rgb,
    thickness: f64,
    pending: Vec<Point>,
    drag_anchor: Option<Point>,
}

impl EditorState {
    /// Creates an editor with default settings.
    pub fn new() -> Self {
        let config = Config::default();
        let palette = Palette::default();
        Self {
            scene: Scene::new(),
            selection: SelectionManager::new(),
            clip: ClipWindow::new(),
            thickness: config.drawing.initial_thickness,
            color: palette.current(),
            palette,
            config,
            mode: EditorMode::Select,
            pending: Vec::new(),
            drag_anchor: None,
        }
    }

    /// Creates an editor from loaded settings.
    ///
    /// Palette and thickness problems are reported as their own variants;
    /// any other invalid value surfaces as [`Error::Settings`].
    pub fn with_config(config: &Config) -> Result<Self> {
        let drawing = &config.drawing;
        let palette = Palette::new(drawing.initial_color_index)?;
        if !(drawing.min_thickness..=drawing.max_thickness).contains(&drawing.initial_thickness) {
            return Err(Error::InvalidThickness {
                value: drawing.initial_thickness,
                min: drawing.min_thickness,
                max: drawing.max_thickness,
            });
        }
        config.validate()?;

        Ok(Self {
            color: palette.current(),
            palette,
            thickness: drawing.initial_thickness,
            config: config.clone(),
            ..Self::new()
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches mode and discards any half-finished shape.
    ///
    /// Entering clip definition drops the active clip window.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == EditorMode::DefineClipStart {
            self.clip.clear();
        }
        self.pending.clear();
        self.mode = mode;
        tracing::debug!(%mode, "mode changed");
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Clicks collected toward the shape or clip window being defined.
    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    pub fn is_dragging_clip(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn shapes(&self) -> &[DrawingObject] {
        self.scene.shapes()
    }

    pub fn selected(&self) -> Option<&DrawingObject> {
        self.selection
            .selected_id()
            .and_then(|id| self.scene.get(id))
    }

    fn selected_mut(&mut self) -> Option<&mut DrawingObject> {
        let id = self.selection.selected_id()?;
        self.scene.get_mut(id)
    }

    /// Style applied to newly drawn shapes.
    pub fn current_style(&self) -> Style {
        Style::new(self.color, self.thickness)
    }

    /// Applies `t` to the selected shape. Returns false with no selection.
    pub fn transform_selected(&mut self, t: Transformation) -> bool {
        match self.selected_mut() {
            Some(obj) => {
                obj.apply(t);
                true
            }
            None => false,
        }
    }

    /// Advances the palette and recolours the selected shape.
    pub fn cycle_color(&mut self) {
        self.color = self.palette.advance();
        let color = self.color;
        if let Some(obj) = self.selected_mut() {
            obj.style.color = color;
        }
    }

    pub fn increase_thickness(&mut self) {
        let step = self.config.drawing.thickness_step;
        let max = self.config.drawing.max_thickness;
        self.set_thickness((self.thickness + step).min(max));
    }

    pub fn decrease_thickness(&mut self) {
        let step = self.config.drawing.thickness_step;
        let min = self.config.drawing.min_thickness;
        self.set_thickness((self.thickness - step).max(min));
    }

    fn set_thickness(&mut self, thickness: f64) {
        self.thickness = thickness;
        if let Some(obj) = self.selected_mut() {
            obj.style.thickness = thickness;
        }
    }

    /// Removes every shape, the selection and the clip window.
    pub fn clear_all(&mut self) {
        self.scene.clear();
        self.selection.reset();
        self.clip.clear();
        self.drag_anchor = None;
    }

    /// Escape: drop the selection and pending clicks, leave draw/define modes.
    pub fn cancel(&mut self) {
        self.selection.deselect_all(&mut self.scene);
        self.pending.clear();
        if self.mode.is_drawing() || self.mode.is_defining_clip() {
            self.mode = EditorMode::Select;
        }
    }

    /// Help and status text for the on-screen overlay.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "--- MODE ---".to_string(),
            format!("Current mode: {}", self.mode),
            " [1] Point | [2] Segment | [3] Rectangle | [4] Ellipse".to_string(),
            " [s] Select".to_string(),
            " [w] Define/Reset clip window".to_string(),
            " ".to_string(),
            "--- CONTROLS ---".to_string(),
            format!("[c] Change colour: {}", self.color),
            format!("[+/-] Change thickness: {:.1}", self.thickness),
            "[x] Clear all | [ESC] Cancel".to_string(),
            " ".to_string(),
            "--- TRANSFORM ---".to_string(),
            "*Select a shape first (s)".to_string(),
            " ".to_string(),
            "Translate: arrow keys".to_string(),
            "Rotate: [ ] / { }".to_string(),
            "Scale: PgUp/PgDn".to_string(),
        ];
        if self.clip.active() {
            lines.push(String::new());
            lines.push("Clip window active. Click & drag to move.".to_string());
        }
        lines
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
