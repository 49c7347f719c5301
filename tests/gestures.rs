use egui::Pos2;
use sticker_sketchpad::{
    EditorContext, ElementType, PaintOp, Positioned, RecordingSurface, RedrawKind, SketchConfig,
};

fn create_context() -> EditorContext {
    EditorContext::with_rotation_source(SketchConfig::default(), Box::new(|| 0.5_f32))
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(egui::vec2(256.0, 256.0))
}

#[test]
fn test_stroke_undo_redo_scenario() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(10.0, 10.0));
    context.pointer_move(Pos2::new(20.0, 10.0));
    context.pointer_move(Pos2::new(30.0, 10.0));
    context.pointer_up();

    let expected = [
        Pos2::new(10.0, 10.0),
        Pos2::new(20.0, 10.0),
        Pos2::new(30.0, 10.0),
    ];
    assert_eq!(context.document().len(), 1);
    let stroke = context.document().elements()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &expected);

    context.undo();
    assert!(context.document().is_empty());
    assert_eq!(context.history().redo_stack().len(), 1);
    let undone = context.history().redo_stack()[0].as_stroke().unwrap();
    assert_eq!(undone.points(), &expected);

    context.redo();
    assert_eq!(context.document().len(), 1);
    assert_eq!(
        context.document().elements()[0].as_stroke().unwrap().points(),
        &expected
    );
}

#[test]
fn test_single_click_commits_a_silent_stroke() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(10.0, 10.0));
    context.pointer_up();

    assert_eq!(context.document().len(), 1);
    let mut surface = surface();
    context.redraw(&mut surface);
    assert_eq!(surface.ops(), &[PaintOp::Clear]);
}

#[test]
fn test_up_without_gesture_is_noop() {
    let mut context = create_context();
    context.pointer_move(Pos2::new(3.0, 3.0));
    context.pointer_up();
    context.pointer_leave();
    assert!(context.document().is_empty());
}

#[test]
fn test_leave_finishes_gesture() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(1.0, 1.0));
    context.pointer_move(Pos2::new(2.0, 2.0));
    context.pointer_leave();
    assert_eq!(context.document().len(), 1);
    assert_eq!(context.pending_redraw(), RedrawKind::Full);
}

#[test]
fn test_commit_during_redo_window_clears_redo() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(1.0, 1.0));
    context.pointer_move(Pos2::new(2.0, 2.0));
    context.pointer_up();
    context.undo();
    assert!(context.can_redo());

    context.pointer_down(Pos2::new(5.0, 5.0));
    context.pointer_move(Pos2::new(6.0, 6.0));
    context.pointer_up();
    assert!(!context.can_redo());
}

#[test]
fn test_interim_redraw_paints_buffer_instead_of_preview() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(10.0, 10.0));
    context.pointer_move(Pos2::new(20.0, 10.0));
    assert_eq!(context.pending_redraw(), RedrawKind::Interim);
    assert!(context.document().is_empty());

    let mut surface = surface();
    context.redraw(&mut surface);
    assert_eq!(
        surface.ops(),
        &[
            PaintOp::Clear,
            PaintOp::Path {
                points: vec![Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0)],
                width: 1.0,
                color: context.config().ink(),
            }
        ]
    );
}

#[test]
fn test_redraw_replays_list_in_order() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(0.0, 0.0));
    context.pointer_move(Pos2::new(5.0, 0.0));
    context.pointer_up();
    context.select_sticker("⭐");
    context.pointer_down(Pos2::new(50.0, 50.0));

    let mut surface = surface();
    context.redraw(&mut surface);
    context.redraw(&mut surface);

    // Each redraw starts over from a cleared surface.
    let frame = surface.since_last_clear();
    assert_eq!(surface.ops().len(), 2 * (frame.len() + 1));
    assert!(matches!(frame[0], PaintOp::Path { .. }));
    assert!(matches!(frame[1], PaintOp::Glyph { .. }));
}

#[test]
fn test_sticker_placement_scenario() {
    let mut context = create_context();
    context.select_sticker("⭐");
    assert!(context.tool().is_placing());

    context.pointer_down(Pos2::new(50.0, 50.0));
    assert_eq!(context.document().len(), 1);
    let ElementType::Sticker(mark) = &context.document().elements()[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(mark.glyph(), "⭐");
    assert_eq!(mark.position(), Pos2::new(50.0, 50.0));
    assert_eq!(mark.rotation(), 0.5);
    assert!(context.tool().is_drawing());
}

#[test]
fn test_pointer_up_after_placement_adds_nothing() {
    let mut context = create_context();
    context.select_sticker("🌮");
    context.pointer_down(Pos2::new(50.0, 50.0));
    context.pointer_up();
    assert_eq!(context.document().len(), 1);
}

#[test]
fn test_movement_alone_never_commits() {
    let mut context = create_context();
    context.pointer_down(Pos2::new(0.0, 0.0));
    for step in 1..50 {
        context.pointer_move(Pos2::new(step as f32, step as f32));
    }
    assert!(context.document().is_empty());
    assert_eq!(context.pending_redraw(), RedrawKind::Interim);

    context.select_sticker("🐸");
    context.pointer_move(Pos2::new(80.0, 80.0));
    assert!(context.document().is_empty());
}
