use crate::geometry::{Point2, Vec2};
use crate::shapes::{ComponentCountError, FloatRect};
use std::fmt::Formatter;

/// A rectangle described by its top-left corner and its extent.
///
/// Despite the name, the components are single precision floats: the type is meant for
/// pixel-aligned rectangles, but no rounding is ever applied. No restriction is imposed on the sign
/// of `width` and `height`.
///
/// The rectangle has no behaviour besides being converted to a [FloatRect], where every query is
/// implemented.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct IntegerRect {
    /// Horizontal coordinate of the top-left corner.
    pub x: f32,
    /// Vertical coordinate of the top-left corner.
    pub y: f32,
    /// Horizontal extent of the rectangle.
    pub width: f32,
    /// Vertical extent of the rectangle.
    pub height: f32,
}

impl IntegerRect {
    /// Constructs a rectangle with every component set to `0.0`.
    /// # Examples
    /// ```
    /// use rectf::shapes::IntegerRect;
    ///
    /// let rect = IntegerRect::zero();
    ///
    /// assert_eq!(rect, IntegerRect::new(0.0, 0.0, 0.0, 0.0));
    /// ```
    pub fn zero() -> IntegerRect {
        IntegerRect {
            x: 0.,
            y: 0.,
            width: 0.,
            height: 0.,
        }
    }

    /// Constructs a rectangle with the given components, stored as they are.
    /// # Examples
    /// ```
    /// use rectf::shapes::IntegerRect;
    ///
    /// let rect = IntegerRect::new(1.0, 2.0, -3.0, 4.0);
    ///
    /// assert_eq!(rect.x, 1.0);
    /// assert_eq!(rect.y, 2.0);
    /// assert_eq!(rect.width, -3.0);
    /// assert_eq!(rect.height, 4.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> IntegerRect {
        IntegerRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Constructs an independent copy of another rectangle.
    /// # Examples
    /// ```
    /// use rectf::shapes::IntegerRect;
    ///
    /// let original = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    /// let copy = IntegerRect::copy_from(&original);
    ///
    /// assert_eq!(copy, original);
    /// ```
    pub fn copy_from(other: &IntegerRect) -> IntegerRect {
        IntegerRect {
            x: other.x,
            y: other.y,
            width: other.width,
            height: other.height,
        }
    }

    /// Converts the rectangle into its edge-coordinates representation.
    /// # Examples
    /// ```
    /// use rectf::shapes::{FloatRect, IntegerRect};
    ///
    /// let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(rect.to_float_rect(), FloatRect::new(1.0, 2.0, 4.0, 6.0));
    /// ```
    pub fn to_float_rect(&self) -> FloatRect {
        FloatRect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns the top-left corner.
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// use rectf::shapes::IntegerRect;
    ///
    /// let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(rect.origin(), Point2::new(1.0, 2.0));
    /// ```
    pub fn origin(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns the extent as a vector.
    /// # Examples
    /// ```
    /// use rectf::geometry::Vec2;
    /// use rectf::shapes::IntegerRect;
    ///
    /// let rect = IntegerRect::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(rect.size(), Vec2::new(3.0, 4.0));
    /// ```
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<FloatRect> for IntegerRect {
    fn from(rect: FloatRect) -> Self {
        rect.to_integer_rect()
    }
}

impl From<[f32; 4]> for IntegerRect {
    fn from(values: [f32; 4]) -> Self {
        IntegerRect::new(values[0], values[1], values[2], values[3])
    }
}

impl From<IntegerRect> for [f32; 4] {
    fn from(rect: IntegerRect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

impl TryFrom<&[f32]> for IntegerRect {
    type Error = ComponentCountError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        match values {
            [x, y, width, height] => Ok(IntegerRect::new(*x, *y, *width, *height)),
            _ => Err(ComponentCountError {
                target: "IntegerRect",
                found: values.len(),
            }),
        }
    }
}

impl std::fmt::Display for IntegerRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IntegerRect[{}, {}, {}, {}]",
            self.x, self.y, self.width, self.height
        )
    }
}
