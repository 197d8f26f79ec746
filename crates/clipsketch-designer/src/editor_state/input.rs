//! Keyboard and mouse dispatch.

use serde::{Deserialize, Serialize};

use super::{EditorMode, EditorState};
use crate::clip::ClipRegion;
use crate::model::{DesignEllipse, DesignPoint, DesignRectangle, DesignSegment, Point, Shape};
use crate::transform::Transformation;

const ESCAPE: char = '\u{1b}';

/// Non-character keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Escape,
}

/// A single user input. Coordinates are canvas pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(char),
    Special(SpecialKey),
    MouseDown { x: f64, y: f64 },
    MouseUp { x: f64, y: f64 },
    MouseMotion { x: f64, y: f64 },
}

impl EditorState {
    /// Applies one input event. Returns true when the frame should be redrawn.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => {
                self.handle_key(key);
                true
            }
            InputEvent::Special(key) => {
                self.handle_special(key);
                true
            }
            InputEvent::MouseDown { x, y } => {
                self.handle_mouse_down(Point::new(x, y));
                true
            }
            InputEvent::MouseUp { .. } => {
                self.drag_anchor = None;
                true
            }
            InputEvent::MouseMotion { x, y } => self.handle_motion(Point::new(x, y)),
        }
    }

    fn handle_key(&mut self, key: char) {
        let lower = key.to_ascii_lowercase();

        if let Some(mode) = mode_for_key(lower) {
            self.set_mode(mode);
        } else {
            match lower {
                'c' => self.cycle_color(),
                '+' | '=' => self.increase_thickness(),
                '-' | '_' => self.decrease_thickness(),
                'x' => self.clear_all(),
                ESCAPE => self.cancel(),
                '[' | '{' | ']' | '}' => {}
                other => tracing::warn!(key = ?other, "unbound key ignored"),
            }
        }

        let step = self.config.transform.rotate_step_degrees;
        match lower {
            '[' | '{' => {
                self.transform_selected(Transformation::Rotate { degrees: -step });
            }
            ']' | '}' => {
                self.transform_selected(Transformation::Rotate { degrees: step });
            }
            _ => {}
        }
    }

    fn handle_special(&mut self, key: SpecialKey) {
        let t = &self.config.transform;
        let (step, up, down) = (t.translate_step, t.scale_up, t.scale_down);

        let transformation = match key {
            SpecialKey::Up => Transformation::Translate { dx: 0.0, dy: -step },
            SpecialKey::Down => Transformation::Translate { dx: 0.0, dy: step },
            SpecialKey::Left => Transformation::Translate { dx: -step, dy: 0.0 },
            SpecialKey::Right => Transformation::Translate { dx: step, dy: 0.0 },
            SpecialKey::PageUp => Transformation::Scale { factor: up },
            SpecialKey::PageDown => Transformation::Scale { factor: down },
            SpecialKey::Escape => {
                self.cancel();
                return;
            }
        };
        self.transform_selected(transformation);
    }

    fn handle_mouse_down(&mut self, p: Point) {
        if self.clip.active() && self.clip.contains(p) {
            self.drag_anchor = Some(p);
            return;
        }

        match self.mode {
            EditorMode::Select => {
                self.selection.select_at(&mut self.scene, p);
            }
            EditorMode::DrawPoint => {
                let style = self.current_style();
                self.scene.add(Shape::Point(DesignPoint::new(p)), style);
            }
            EditorMode::DrawSegment | EditorMode::DrawRectangle | EditorMode::DrawEllipse => {
                self.pending.push(p);
                if let [p1, p2] = self.pending[..] {
                    let shape = match self.mode {
                        EditorMode::DrawSegment => Shape::Segment(DesignSegment::new(p1, p2)),
                        EditorMode::DrawRectangle => {
                            Shape::Rectangle(DesignRectangle::from_corners(p1, p2))
                        }
                        _ => Shape::Ellipse(DesignEllipse::new(
                            p1,
                            (p2.x - p1.x).abs(),
                            (p2.y - p1.y).abs(),
                        )),
                    };
                    let style = self.current_style();
                    self.scene.add(shape, style);
                    self.pending.clear();
                }
            }
            EditorMode::DefineClipStart => {
                self.pending.clear();
                self.pending.push(p);
                self.mode = EditorMode::DefineClipEnd;
            }
            EditorMode::DefineClipEnd => {
                let first = self.pending.first().copied().unwrap_or(p);
                self.clip.set(ClipRegion::from_corners(first, p));
                self.pending.clear();
                self.mode = EditorMode::Select;
            }
        }
    }

    fn handle_motion(&mut self, p: Point) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        if !self.clip.active() {
            self.drag_anchor = None;
            return false;
        }
        self.clip.translate(p.x - anchor.x, p.y - anchor.y);
        self.drag_anchor = Some(p);
        true
    }
}

fn mode_for_key(key: char) -> Option<EditorMode> {
    match key {
        '1' | 'd' => Some(EditorMode::DrawPoint),
        '2' | 'l' => Some(EditorMode::DrawSegment),
        '3' | 'r' => Some(EditorMode::DrawRectangle),
        '4' | 'e' => Some(EditorMode::DrawEllipse),
        's' => Some(EditorMode::Select),
        'w' => Some(EditorMode::DefineClipStart),
        _ => None,
    }
}
