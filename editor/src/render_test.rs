#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;
use crate::doc::{ImageSize, SpriteBox};
use crate::input::{Button, ZoomDirection};

fn core_with(boxes: Vec<SpriteBox>) -> EditorCore {
    let mut core = EditorCore::default();
    core.load_image("sheet.png", ImageSize::new(100, 100), boxes);
    core
}

fn select_at(core: &mut EditorCore, x: f64, y: f64) {
    core.pointer_down(Point::new(x, y), Button::Primary);
    core.pointer_up(Point::new(x, y), Button::Primary);
}

fn stroke_colors(scene: &Scene) -> Vec<&'static str> {
    scene
        .items
        .iter()
        .filter_map(|item| match item {
            DrawItem::StrokeRect { color, .. } => Some(*color),
            DrawItem::FillRect { .. } => None,
        })
        .collect()
}

#[test]
fn empty_editor_draws_nothing() {
    let scene = scene(&EditorCore::default());
    assert!(scene.items.is_empty());
    assert_eq!(scene.stroke_width, 1.0);
}

#[test]
fn unselected_boxes_are_red_in_index_order() {
    let a = SpriteBox::from_edges(0, 0, 9, 9);
    let b = SpriteBox::from_edges(50, 50, 59, 69);
    let scene = scene(&core_with(vec![a, b]));

    assert_eq!(scene.outline_count(), 2);
    assert_eq!(stroke_colors(&scene), vec![BOX_STROKE, BOX_STROKE]);
    assert_eq!(
        scene.items[1],
        DrawItem::StrokeRect { rect: Rect::new(50.0, 50.0, 10.0, 20.0), color: BOX_STROKE, width: 1.0 }
    );
}

#[test]
fn selected_box_is_green_with_eight_handles_on_top() {
    let a = SpriteBox::from_edges(10, 10, 29, 29);
    let b = SpriteBox::from_edges(50, 50, 59, 59);
    let mut core = core_with(vec![a, b]);
    select_at(&mut core, 20.0, 20.0);

    let scene = scene(&core);
    assert_eq!(stroke_colors(&scene), vec![SELECTED_STROKE, BOX_STROKE]);
    assert_eq!(scene.items.len(), 2 + 8);

    let handles = &scene.items[2..];
    assert!(handles.iter().all(|item| matches!(item, DrawItem::FillRect { color, .. } if *color == SELECTED_STROKE)));
    assert!(handles.contains(&DrawItem::FillRect { rect: Rect::new(5.0, 5.0, 10.0, 10.0), color: SELECTED_STROKE }));
    assert!(handles.contains(&DrawItem::FillRect { rect: Rect::new(25.0, 15.0, 10.0, 10.0), color: SELECTED_STROKE }));
}

#[test]
fn zoom_thins_strokes_and_shrinks_handles() {
    let mut core = core_with(vec![SpriteBox::from_edges(10, 10, 29, 29)]);
    select_at(&mut core, 20.0, 20.0);
    for _ in 0..3 {
        core.zoom_step(ZoomDirection::In, Point::new(0.0, 0.0));
    }

    let zoom = core.zoom();
    let scene = scene(&core);
    assert!((scene.stroke_width - 1.0 / zoom).abs() < 1e-12);
    let DrawItem::StrokeRect { width, .. } = scene.items[0] else {
        panic!("expected outline first");
    };
    assert_eq!(width, scene.stroke_width);
    let DrawItem::FillRect { rect, .. } = scene.items[1] else {
        panic!("expected handle after outline");
    };
    assert!((rect.width - 10.0 / zoom).abs() < 1e-12);
}

#[test]
fn deleting_selection_removes_handles() {
    let mut core = core_with(vec![SpriteBox::from_edges(10, 10, 29, 29)]);
    select_at(&mut core, 20.0, 20.0);
    core.delete_selected();
    assert!(scene(&core).items.is_empty());
}
