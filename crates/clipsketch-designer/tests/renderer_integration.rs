//! Frame building integration tests

use clipsketch_core::{Rgb, PALETTE};
use clipsketch_designer::renderer::shape_command;
use clipsketch_settings::Config;
use clipsketch_designer::{
    build_frame, DrawCommand, EditorState, InputEvent, Point, PrimitiveMode,
};

const CLIP_GREEN: Rgb = Rgb::new(0.2, 0.8, 0.2);

fn click(state: &mut EditorState, x: f64, y: f64) {
    state.dispatch(InputEvent::MouseDown { x, y });
    state.dispatch(InputEvent::MouseUp { x, y });
}

fn draw(state: &mut EditorState, key: char, points: &[(f64, f64)]) {
    state.dispatch(InputEvent::Key(key));
    for &(x, y) in points {
        click(state, x, y);
    }
}

fn define_clip(state: &mut EditorState, a: (f64, f64), b: (f64, f64)) {
    state.dispatch(InputEvent::Key('w'));
    click(state, a.0, a.1);
    click(state, b.0, b.1);
}

fn modes(commands: &[DrawCommand]) -> Vec<PrimitiveMode> {
    commands.iter().map(|c| c.mode).collect()
}

#[test]
fn test_unclipped_frame_uses_shape_style() {
    let mut state = EditorState::new();
    draw(&mut state, '1', &[(5.0, 5.0)]);
    draw(&mut state, '2', &[(0.0, 0.0), (30.0, 30.0)]);
    draw(&mut state, '3', &[(10.0, 10.0), (60.0, 40.0)]);
    draw(&mut state, '4', &[(100.0, 100.0), (120.0, 110.0)]);

    let frame = build_frame(&state);
    assert_eq!(
        modes(&frame.commands),
        vec![
            PrimitiveMode::Points,
            PrimitiveMode::Lines,
            PrimitiveMode::LineLoop,
            PrimitiveMode::LineLoop
        ]
    );
    assert!(frame.commands.iter().all(|c| c.color == PALETTE[2]));
    assert_eq!(frame.commands[0].width, 4.0);
    assert_eq!(frame.commands[1].width, 2.0);
    assert_eq!(frame.commands[3].vertices.len(), 72);
    assert_eq!(frame.clip_bounds, None);
}

#[test]
fn test_clipped_frame() {
    let mut state = EditorState::new();
    draw(&mut state, 'd', &[(150.0, 150.0)]);
    draw(&mut state, 'd', &[(50.0, 50.0)]);
    draw(&mut state, 'l', &[(-10.0, 50.0), (50.0, 50.0)]);
    draw(&mut state, 'r', &[(-50.0, -50.0), (150.0, 150.0)]);
    define_clip(&mut state, (0.0, 0.0), (100.0, 100.0));

    let frame = build_frame(&state);
    assert_eq!(
        modes(&frame.commands),
        vec![
            PrimitiveMode::Points,
            PrimitiveMode::Lines,
            PrimitiveMode::FilledPolygon,
            PrimitiveMode::LineLoop,
            PrimitiveMode::LineLoop,
        ]
    );

    let clipped: Vec<&DrawCommand> = frame.commands.iter().take(4).collect();
    assert!(clipped.iter().all(|c| c.color == CLIP_GREEN));
    assert_eq!(clipped[0].vertices, vec![Point::new(50.0, 50.0)]);
    assert_eq!(
        clipped[1].vertices,
        vec![Point::new(0.0, 50.0), Point::new(50.0, 50.0)]
    );
    assert_eq!(clipped[2].alpha, 0.3);
    assert_eq!(clipped[2].vertices.len(), 4);

    let outline = frame.commands.last().unwrap();
    assert_eq!(outline.stipple, Some(0xAAAA));
    assert_eq!(outline.color, Rgb::new(0.8, 0.2, 0.2));
    assert_eq!(frame.clip_bounds, Some((0.0, 0.0, 100.0, 100.0)));
}

#[test]
fn test_fully_clipped_shapes_emit_nothing() {
    let mut state = EditorState::new();
    draw(&mut state, 'r', &[(200.0, 200.0), (300.0, 300.0)]);
    draw(&mut state, 'l', &[(200.0, 0.0), (300.0, 50.0)]);
    define_clip(&mut state, (0.0, 0.0), (100.0, 100.0));

    let frame = build_frame(&state);
    assert_eq!(modes(&frame.commands), vec![PrimitiveMode::LineLoop]);
    assert!(frame.commands[0].stipple.is_some());
}

#[test]
fn test_selected_shape_gets_padded_box() {
    let mut state = EditorState::new();
    draw(&mut state, 'r', &[(10.0, 10.0), (60.0, 40.0)]);
    state.dispatch(InputEvent::Key('s'));
    click(&mut state, 30.0, 20.0);

    let frame = build_frame(&state);
    assert_eq!(frame.commands.len(), 2);
    let selection = &frame.commands[1];
    assert_eq!(selection.mode, PrimitiveMode::LineLoop);
    assert_eq!(selection.alpha, 0.5);
    assert_eq!(
        selection.vertices,
        vec![
            Point::new(5.0, 5.0),
            Point::new(65.0, 5.0),
            Point::new(65.0, 45.0),
            Point::new(5.0, 45.0),
        ]
    );
}

#[test]
fn test_overlay_layout() {
    let mut state = EditorState::new();
    let frame = build_frame(&state);
    assert_eq!(frame.overlay[0].x, 10.0);
    assert_eq!(frame.overlay[0].y, 20.0);
    assert_eq!(frame.overlay[1].y, 37.0);
    let plain = frame.overlay.len();

    define_clip(&mut state, (0.0, 0.0), (10.0, 10.0));
    let frame = build_frame(&state);
    assert_eq!(frame.overlay.len(), plain + 2);
    assert!(frame.overlay.last().unwrap().text.contains("Clip window active"));
}

#[test]
fn test_shape_command_direct() {
    let mut state = EditorState::new();
    draw(&mut state, 'e', &[(0.0, 0.0), (10.0, 5.0)]);
    let cmd = shape_command(&state.shapes()[0]).unwrap();
    assert_eq!(cmd.mode, PrimitiveMode::LineLoop);
    assert_eq!(cmd.stipple, None);
    assert_eq!(cmd.alpha, 1.0);
}

#[test]
fn test_frame_reports_canvas_size() {
    assert_eq!(build_frame(&EditorState::new()).canvas_size, (1280, 720));

    let mut config = Config::default();
    config.canvas.width = 640;
    config.canvas.height = 480;
    let state = EditorState::with_config(&config).unwrap();
    assert_eq!(build_frame(&state).canvas_size, (640, 480));
}

#[test]
fn test_frame_serializes() {
    let mut state = EditorState::new();
    draw(&mut state, 'r', &[(10.0, 10.0), (60.0, 40.0)]);
    let json = serde_json::to_value(build_frame(&state)).unwrap();
    assert_eq!(json["commands"][0]["mode"], "LineLoop");
    assert_eq!(json["canvas_size"][0], 1280);
    assert!(json["overlay"].as_array().unwrap().len() > 1);
}
