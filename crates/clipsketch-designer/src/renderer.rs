//! Frame builder for the rendering backend.
//!
//! Turns the editor state into an ordered list of primitive draw calls.
//! The backend only has to draw vertex lists in one of four
//! [`PrimitiveMode`]s and place text; all clipping happens here.
//!
//! Per shape, in draw order:
//! - without a clip window the shape is drawn in its own style;
//! - with a clip window only the visible part is drawn, in the clip colour
//!   (closed shapes additionally get a translucent fill);
//! - a selected shape gets a padded bounding box.
//!
//! The dashed clip window outline is drawn last, above every shape.

use clipsketch_core::Rgb;
use serde::Serialize;

use crate::clip::{clip_line, clip_polygon, ClipRegion};
use crate::editor_state::EditorState;
use crate::model::{Bounds, DesignPolygon, DesignerShape, Point, Shape};
use crate::scene::DrawingObject;

const SELECTION_COLOR: Rgb = Rgb::new(0.3, 0.5, 0.8);
const SELECTION_ALPHA: f32 = 0.5;
const SELECTION_WIDTH: f64 = 2.0;
const CLIP_OUTLINE_COLOR: Rgb = Rgb::new(0.8, 0.2, 0.2);
const CLIP_OUTLINE_ALPHA: f32 = 0.7;
const CLIP_OUTLINE_WIDTH: f64 = 3.0;
const CLIP_OUTLINE_STIPPLE: u16 = 0xAAAA;
const TEXT_X: f64 = 10.0;
const TEXT_TOP: f64 = 20.0;
const TEXT_LINE_HEIGHT: f64 = 17.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimitiveMode {
    /// Each vertex is a dot; `width` is the dot size.
    Points,
    /// Vertices pair up into separate segments.
    Lines,
    /// Closed outline through all vertices.
    LineLoop,
    /// Filled convex polygon.
    FilledPolygon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub vertices: Vec<Point>,
    pub color: Rgb,
    pub alpha: f32,
    pub width: f64,
    pub mode: PrimitiveMode,
    /// Line stipple bit pattern for dashed outlines.
    pub stipple: Option<u16>,
}

impl DrawCommand {
    fn new(vertices: Vec<Point>, color: Rgb, width: f64, mode: PrimitiveMode) -> Self {
        Self {
            vertices,
            color,
            alpha: 1.0,
            width,
            mode,
            stipple: None,
        }
    }

    fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// `(width, height)` of the drawing surface in pixels.
    pub canvas_size: (u32, u32),
    pub commands: Vec<DrawCommand>,
    pub overlay: Vec<TextLine>,
    /// `(x_min, y_min, x_max, y_max)` of the active clip window.
    pub clip_bounds: Option<(f64, f64, f64, f64)>,
}

/// Builds the complete frame for the current editor state.
pub fn build_frame(state: &EditorState) -> Frame {
    let canvas = &state.config().canvas;
    let clipping = &state.config().clipping;
    let region = state.clip.region();
    let mut commands = Vec::new();

    for obj in state.shapes() {
        match region {
            Some(region) => {
                clipped_commands(obj, region, clipping.clip_color, clipping.fill_alpha, &mut commands)
            }
            None => commands.extend(shape_command(obj)),
        }

        if obj.selected {
            commands.extend(selection_box(obj, clipping.selection_padding));
        }
    }

    if let Some(region) = region {
        commands.push(clip_outline(region));
    }

    let overlay = state
        .status_lines()
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            x: TEXT_X,
            y: TEXT_TOP + TEXT_LINE_HEIGHT * i as f64,
            text,
        })
        .collect();

    tracing::trace!(commands = commands.len(), "frame built");
    Frame {
        canvas_size: (canvas.width, canvas.height),
        commands,
        overlay,
        clip_bounds: state.clip.bounds(),
    }
}

/// The shape drawn unclipped in its own style.
pub fn shape_command(obj: &DrawingObject) -> Option<DrawCommand> {
    let vertices = obj.vertices_for_clipping();
    if vertices.is_empty() {
        return None;
    }
    let (width, mode) = match obj.shape {
        Shape::Point(_) => (obj.style.thickness * 2.0, PrimitiveMode::Points),
        Shape::Segment(_) => (obj.style.thickness, PrimitiveMode::Lines),
        Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::ClippedPolygon(_) => {
            (obj.style.thickness, PrimitiveMode::LineLoop)
        }
    };
    Some(DrawCommand::new(vertices, obj.style.color, width, mode))
}

fn clipped_commands(
    obj: &DrawingObject,
    region: &ClipRegion,
    clip_color: Rgb,
    fill_alpha: f32,
    out: &mut Vec<DrawCommand>,
) {
    let thickness = obj.style.thickness;
    match &obj.shape {
        Shape::Point(point) => {
            let p = point.position();
            if region.contains(p) {
                out.push(DrawCommand::new(
                    vec![p],
                    clip_color,
                    thickness * 2.0,
                    PrimitiveMode::Points,
                ));
            }
        }
        Shape::Segment(segment) => {
            if let Some((a, b)) = clip_line(region, segment.start(), segment.end()) {
                out.push(DrawCommand::new(
                    vec![a, b],
                    clip_color,
                    thickness,
                    PrimitiveMode::Lines,
                ));
            }
        }
        Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::ClippedPolygon(_) => {
            let clipped = DesignPolygon::new(clip_polygon(region, &obj.vertices_for_clipping()));
            if clipped.is_empty() {
                return;
            }
            out.push(
                DrawCommand::new(
                    clipped.vertices().to_vec(),
                    clip_color,
                    thickness,
                    PrimitiveMode::FilledPolygon,
                )
                .with_alpha(fill_alpha),
            );
            out.push(DrawCommand::new(
                clipped.into_vertices(),
                clip_color,
                thickness,
                PrimitiveMode::LineLoop,
            ));
        }
    }
}

fn selection_box(obj: &DrawingObject, padding: f64) -> Option<DrawCommand> {
    let bounds = Bounds::from_points(&obj.vertices_for_clipping())?.padded(padding);
    Some(
        DrawCommand::new(
            bounds.corners().to_vec(),
            SELECTION_COLOR,
            SELECTION_WIDTH,
            PrimitiveMode::LineLoop,
        )
        .with_alpha(SELECTION_ALPHA),
    )
}

fn clip_outline(region: &ClipRegion) -> DrawCommand {
    let mut cmd = DrawCommand::new(
        region.as_bounds().corners().to_vec(),
        CLIP_OUTLINE_COLOR,
        CLIP_OUTLINE_WIDTH,
        PrimitiveMode::LineLoop,
    )
    .with_alpha(CLIP_OUTLINE_ALPHA);
    cmd.stipple = Some(CLIP_OUTLINE_STIPPLE);
    cmd
}
