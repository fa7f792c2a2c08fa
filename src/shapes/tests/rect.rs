use crate::geometry::{Point2, Vec2};
use crate::shapes::{FloatRect, IntegerRect};

#[test]
fn integerrect_zero_constructor() {
    let rect = IntegerRect::zero();
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 0.0);
    assert_eq!(rect, IntegerRect::default());
}

#[test]
fn integerrect_components_constructor_negative_extent() {
    let rect = IntegerRect::new(-1.0, 2.5, -3.0, -4.5);
    assert_eq!(rect.x, -1.0);
    assert_eq!(rect.y, 2.5);
    assert_eq!(rect.width, -3.0);
    assert_eq!(rect.height, -4.5);
}

#[test]
fn integerrect_copy_is_independent() {
    let original = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    let mut copy = IntegerRect::copy_from(&original);
    assert_eq!(copy, original);
    copy.x = 100.0;
    copy.height = -1.0;
    assert_eq!(original.x, 1.0);
    assert_eq!(original.height, 4.0);
}

#[test]
fn integerrect_to_float_rect() {
    let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    let converted = rect.to_float_rect();
    assert_eq!(converted.left, 1.0);
    assert_eq!(converted.top, 2.0);
    assert_eq!(converted.right, 4.0);
    assert_eq!(converted.bottom, 6.0);
}

#[test]
fn integerrect_to_float_rect_negative_extent() {
    let converted = IntegerRect::new(5.0, 5.0, -3.0, -1.0).to_float_rect();
    assert_eq!(converted, FloatRect::new(5.0, 5.0, 2.0, 4.0));
    assert!(converted.is_empty());
}

#[test]
fn integerrect_to_float_rect_nan_propagates() {
    let converted = IntegerRect::new(0.0, 0.0, f32::NAN, 1.0).to_float_rect();
    assert!(converted.right.is_nan());
    assert_eq!(converted.bottom, 1.0);
}

#[test]
fn integerrect_from_trait() {
    let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    let converted: FloatRect = rect.into();
    assert_eq!(converted, rect.to_float_rect());
    let back = IntegerRect::from(converted);
    assert_eq!(back, rect);
}

#[test]
fn integerrect_origin_and_size() {
    let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(rect.origin(), Point2::new(1.0, 2.0));
    assert_eq!(rect.size(), Vec2::new(3.0, 4.0));
}

#[test]
fn integerrect_array_conversion() {
    let rect = IntegerRect::from([1.0f32, 2.0, 3.0, 4.0]);
    assert_eq!(rect, IntegerRect::new(1.0, 2.0, 3.0, 4.0));
    let values: [f32; 4] = rect.into();
    assert_eq!(values, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn integerrect_try_from_slice() {
    let values: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
    let rect = IntegerRect::try_from(&values[..]).unwrap();
    assert_eq!(rect, IntegerRect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn integerrect_try_from_slice_wrong_length() {
    let values: [f32; 3] = [1.0, 2.0, 3.0];
    let err = IntegerRect::try_from(&values[..]).unwrap_err();
    assert_eq!(err.target, "IntegerRect");
    assert_eq!(err.found, 3);
    assert_eq!(
        format!("{}", err),
        "Error while building IntegerRect: expected 4 components, found 3"
    );
    let empty: [f32; 0] = [];
    assert_eq!(IntegerRect::try_from(&empty[..]).unwrap_err().found, 0);
}

#[test]
fn integerrect_display() {
    let rect = IntegerRect::new(0.5, 1.0, 2.0, -3.25);
    assert_eq!(format!("{}", rect), "IntegerRect[0.5, 1, 2, -3.25]");
}
