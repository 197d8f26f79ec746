//! # ClipSketch Designer
//!
//! The geometry core of the ClipSketch editor: shapes, affine transforms,
//! rectangular window clipping and picking, together with the editor state
//! that drives them from user input.
//!
//! ## Core Components
//!
//! - **Model**: points, segments, rectangles and ellipses behind one
//!   [`Shape`] enum, all exposing their global vertex loop
//! - **Transform**: homogeneous 3x3 translate/rotate/scale anchored on the
//!   shape's centroid
//! - **Clip**: [`ClipRegion`] outcodes, Cohen–Sutherland segment clipping
//!   and Sutherland–Hodgman polygon clipping
//! - **Selection**: bounding-box picking in reverse draw order
//! - **Editor state**: modes, style, pending clicks and input dispatch
//! - **Renderer**: frame of primitive draw calls for the display backend
//!
//! ## Architecture
//!
//! ```text
//! InputEvent ──> EditorState::dispatch
//!                  ├── Scene (ordered DrawingObjects)
//!                  ├── SelectionManager
//!                  └── ClipWindow (optional ClipRegion)
//!
//! renderer::build_frame(&EditorState)
//!   ├── clip_line / clip_polygon per shape
//!   └── Frame { commands, overlay }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use clipsketch_designer::{build_frame, EditorState, InputEvent};
//!
//! let mut state = EditorState::new();
//! state.dispatch(InputEvent::Key('r'));
//! state.dispatch(InputEvent::MouseDown { x: 10.0, y: 10.0 });
//! state.dispatch(InputEvent::MouseDown { x: 60.0, y: 40.0 });
//! assert_eq!(state.scene.len(), 1);
//!
//! let frame = build_frame(&state);
//! assert_eq!(frame.commands.len(), 1);
//! ```

pub mod clip;
pub mod editor_state;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod selection_manager;
pub mod transform;

pub use clip::{clip_line, clip_polygon, Boundary, ClipRegion, ClipWindow, Outcode};
pub use editor_state::{EditorMode, EditorState, InputEvent, SpecialKey};
pub use model::{
    Bounds, DesignEllipse, DesignPoint, DesignPolygon, DesignRectangle, DesignSegment,
    DesignerShape, Point, Shape, ShapeType, ELLIPSE_SEGMENTS,
};
pub use renderer::{build_frame, DrawCommand, Frame, PrimitiveMode, TextLine};
pub use scene::{DrawingObject, Scene, Style};
pub use selection_manager::{pick, SelectionManager};
pub use transform::Transformation;
