use super::*;

// =============================================================
// SpriteBox
// =============================================================

#[test]
fn box_edges_read_back() {
    let b = SpriteBox::from_edges(10, 20, 29, 49);
    assert_eq!(b.left(), 10);
    assert_eq!(b.top(), 20);
    assert_eq!(b.right(), 29);
    assert_eq!(b.bottom(), 49);
}

#[test]
fn box_size_is_inclusive() {
    let b = SpriteBox::from_edges(10, 10, 29, 29);
    assert_eq!(b.width(), 20);
    assert_eq!(b.height(), 20);
}

#[test]
fn single_pixel_box_has_unit_size() {
    let b = SpriteBox::from_edges(5, 5, 5, 5);
    assert_eq!(b.width(), 1);
    assert_eq!(b.height(), 1);
    assert!(b.is_normalized());
}

#[test]
fn normalized_swaps_inverted_corners() {
    let b = SpriteBox::from_edges(30, 40, 10, 20);
    assert!(!b.is_normalized());
    assert_eq!(b.normalized(), SpriteBox::from_edges(10, 20, 30, 40));
}

#[test]
fn normalized_swaps_one_axis_only() {
    let b = SpriteBox::from_edges(30, 20, 10, 40);
    assert_eq!(b.normalized(), SpriteBox::from_edges(10, 20, 30, 40));
}

#[test]
fn normalized_is_noop_on_ordered_box() {
    let b = SpriteBox::from_edges(1, 2, 3, 4);
    assert_eq!(b.normalized(), b);
}

#[test]
fn fields_report_position_and_inclusive_size() {
    let f = SpriteBox::from_edges(10, 12, 29, 31).fields();
    assert_eq!(f, BoxFields { x: 10, y: 12, width: 20, height: 20 });
}

#[test]
fn box_serde_round_trip_shape() {
    let b = SpriteBox::from_edges(1, 2, 3, 4);
    let json = serde_json::to_value(b).unwrap();
    assert_eq!(json["top_left"]["x"], 1);
    assert_eq!(json["bottom_right"]["y"], 4);
    let back: SpriteBox = serde_json::from_value(json).unwrap();
    assert_eq!(back, b);
}

// =============================================================
// ImageSize
// =============================================================

#[test]
fn image_max_coordinates_are_inclusive() {
    let img = ImageSize::new(100, 50);
    assert_eq!(img.max_x(), 99);
    assert_eq!(img.max_y(), 49);
}

#[test]
fn empty_image_max_coordinates_do_not_go_negative() {
    let img = ImageSize::new(0, 0);
    assert_eq!(img.max_x(), 0);
    assert_eq!(img.max_y(), 0);
}

#[test]
fn image_clamp_pins_to_edges() {
    let img = ImageSize::new(100, 100);
    assert_eq!(img.clamp(PixelPos::new(-5, 150)), PixelPos::new(0, 99));
    assert_eq!(img.clamp(PixelPos::new(40, 60)), PixelPos::new(40, 60));
}

// =============================================================
// BoxFields: parsing
// =============================================================

#[test]
fn parse_accepts_integers_with_whitespace() {
    let f = BoxFields::parse(" 1", "2 ", "3", "4").unwrap();
    assert_eq!(f, BoxFields { x: 1, y: 2, width: 3, height: 4 });
}

#[test]
fn parse_blank_reads_as_zero() {
    let f = BoxFields::parse("", "", "5", "5").unwrap();
    assert_eq!(f.x, 0);
    assert_eq!(f.y, 0);
}

#[test]
fn parse_rejects_non_numeric() {
    let err = BoxFields::parse("1", "abc", "3", "4").unwrap_err();
    assert_eq!(err, EditError::NotANumber { field: "y", value: "abc".into() });
}

#[test]
fn parse_rejects_fractions() {
    assert!(matches!(
        BoxFields::parse("1.5", "0", "3", "4"),
        Err(EditError::NotANumber { field: "x", .. })
    ));
}

// =============================================================
// BoxFields: validation
// =============================================================

#[test]
fn to_box_uses_inclusive_size() {
    let f = BoxFields { x: 10, y: 10, width: 20, height: 20 };
    let b = f.to_box(ImageSize::new(100, 100)).unwrap();
    assert_eq!(b, SpriteBox::from_edges(10, 10, 29, 29));
    assert_eq!(b.fields(), f);
}

#[test]
fn to_box_rejects_zero_width() {
    let f = BoxFields { x: 0, y: 0, width: 0, height: 5 };
    assert_eq!(f.to_box(ImageSize::new(10, 10)), Err(EditError::Degenerate { width: 0, height: 5 }));
}

#[test]
fn to_box_rejects_negative_height() {
    let f = BoxFields { x: 0, y: 0, width: 5, height: -1 };
    assert!(matches!(f.to_box(ImageSize::new(10, 10)), Err(EditError::Degenerate { .. })));
}

#[test]
fn to_box_accepts_box_touching_far_edges() {
    let f = BoxFields { x: 90, y: 90, width: 10, height: 10 };
    let b = f.to_box(ImageSize::new(100, 100)).unwrap();
    assert_eq!(b.right(), 99);
    assert_eq!(b.bottom(), 99);
}

#[test]
fn to_box_rejects_box_past_right_edge() {
    let f = BoxFields { x: 91, y: 0, width: 10, height: 10 };
    assert!(matches!(f.to_box(ImageSize::new(100, 100)), Err(EditError::OutOfBounds { .. })));
}

#[test]
fn to_box_rejects_negative_origin() {
    let f = BoxFields { x: -1, y: 0, width: 10, height: 10 };
    assert!(matches!(f.to_box(ImageSize::new(100, 100)), Err(EditError::OutOfBounds { .. })));
}

#[test]
fn edit_error_messages_are_readable() {
    let err = EditError::Degenerate { width: 0, height: 3 };
    assert_eq!(err.to_string(), "box would be empty (0x3)");
    assert_eq!(EditError::NoSelection.to_string(), "no box is selected");
}
