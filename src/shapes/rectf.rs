use crate::geometry::{Point2, Vec2};
use crate::shapes::{ComponentCountError, IntegerRect};
use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A rectangle described by the coordinates of its four edges.
///
/// The `x` axis grows towards the `right` edge and the `y` axis grows towards the `bottom` edge.
/// No restriction is imposed on the order of the edges: a rectangle with `right < left` or
/// `bottom < top` is a valid value, it is simply considered empty and reports negative dimensions.
///
/// Every query is a plain function of the four edges, and every mutator overwrites them in place.
/// No operation can fail.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FloatRect {
    /// Horizontal coordinate of the left edge.
    pub left: f32,
    /// Vertical coordinate of the top edge.
    pub top: f32,
    /// Horizontal coordinate of the right edge.
    pub right: f32,
    /// Vertical coordinate of the bottom edge.
    pub bottom: f32,
}

impl FloatRect {
    /// Constructs a rectangle with every edge in the origin.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::zero();
    ///
    /// assert!(rect.is_empty());
    /// assert_eq!(rect.width(), 0.0);
    /// ```
    pub fn zero() -> FloatRect {
        FloatRect {
            left: 0.,
            top: 0.,
            right: 0.,
            bottom: 0.,
        }
    }

    /// Constructs a rectangle with the given edges, stored as they are.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(rect.left, 1.0);
    /// assert_eq!(rect.top, 2.0);
    /// assert_eq!(rect.right, 3.0);
    /// assert_eq!(rect.bottom, 4.0);
    /// ```
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> FloatRect {
        FloatRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Constructs an independent copy of another rectangle.
    ///
    /// Mutating the copy never affects the original.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let original = FloatRect::new(1.0, 2.0, 3.0, 4.0);
    /// let mut copy = FloatRect::copy_from(&original);
    /// copy.set_empty();
    ///
    /// assert_eq!(original.left, 1.0);
    /// assert_eq!(copy.left, 0.0);
    /// ```
    pub fn copy_from(other: &FloatRect) -> FloatRect {
        FloatRect {
            left: other.left,
            top: other.top,
            right: other.right,
            bottom: other.bottom,
        }
    }

    /// Converts the rectangle into its origin and extent representation.
    ///
    /// Width and height are computed from the edges at conversion time, so an inverted rectangle
    /// produces a negative extent.
    /// # Examples
    /// ```
    /// use rectf::shapes::{FloatRect, IntegerRect};
    ///
    /// let rect = FloatRect::new(1.0, 2.0, 4.0, 6.0);
    /// assert_eq!(rect.to_integer_rect(), IntegerRect::new(1.0, 2.0, 3.0, 4.0));
    ///
    /// let inverted = FloatRect::new(5.0, 5.0, 2.0, 2.0);
    /// assert_eq!(inverted.to_integer_rect().width, -3.0);
    /// ```
    pub fn to_integer_rect(&self) -> IntegerRect {
        let width = self.width();
        let height = self.height();
        #[cfg(debug_assertions)]
        {
            if width < 0. || height < 0. {
                log::warn!("Converting an inverted FloatRect, the extent will be negative");
            }
        }
        IntegerRect::new(self.left, self.top, width, height)
    }

    /// Returns true if the rectangle has no area, that is if `left >= right` or `top >= bottom`.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// assert!(FloatRect::new(0.0, 0.0, 0.0, 5.0).is_empty());
    /// assert!(!FloatRect::new(0.0, 0.0, 5.0, 5.0).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns the width of the rectangle.
    ///
    /// The edge order is not checked, so the result may be negative.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// assert_eq!(FloatRect::new(5.0, 5.0, 2.0, 2.0).width(), -3.0);
    /// ```
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    ///
    /// The edge order is not checked, so the result may be negative.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// assert_eq!(FloatRect::new(0.0, 1.0, 2.0, 4.0).height(), 3.0);
    /// ```
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the horizontal center of the rectangle.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// assert_eq!(FloatRect::new(0.0, 0.0, 10.0, 4.0).center_x(), 5.0);
    /// ```
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// Returns the vertical center of the rectangle.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// assert_eq!(FloatRect::new(0.0, 0.0, 10.0, 4.0).center_y(), 2.0);
    /// ```
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    /// Returns the center of the rectangle as a point.
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(0.0, 0.0, 10.0, 4.0);
    ///
    /// assert_eq!(rect.center(), Point2::new(5.0, 2.0));
    /// ```
    pub fn center(&self) -> Point2 {
        Point2::new(self.center_x(), self.center_y())
    }

    /// Returns the top-left corner of the rectangle.
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(1.0, 2.0, 10.0, 4.0);
    ///
    /// assert_eq!(rect.top_left(), Point2::new(1.0, 2.0));
    /// ```
    pub fn top_left(&self) -> Point2 {
        Point2::new(self.left, self.top)
    }

    /// Returns width and height of the rectangle as a vector.
    /// # Examples
    /// ```
    /// use rectf::geometry::Vec2;
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(1.0, 2.0, 10.0, 4.0);
    ///
    /// assert_eq!(rect.size(), Vec2::new(9.0, 2.0));
    /// ```
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Sets every edge to `0.0`.
    ///
    /// The rectangle is collapsed in the origin, not in its current top-left corner.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let mut rect = FloatRect::new(1.0, 2.0, 3.0, 4.0);
    /// rect.set_empty();
    ///
    /// assert_eq!(rect, FloatRect::zero());
    /// ```
    pub fn set_empty(&mut self) {
        self.left = 0.;
        self.top = 0.;
        self.right = 0.;
        self.bottom = 0.;
    }

    /// Translates the rectangle by adding `dx` to its left and right edges, and `dy` to its top and
    /// bottom edges.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let mut rect = FloatRect::new(1.0, 1.0, 4.0, 4.0);
    /// rect.offset(2.0, 3.0);
    ///
    /// assert_eq!(rect, FloatRect::new(3.0, 4.0, 6.0, 7.0));
    /// assert_eq!(rect.width(), 3.0);
    /// assert_eq!(rect.height(), 3.0);
    /// ```
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.top += dy;
        self.right += dx;
        self.bottom += dy;
    }

    /// Moves the rectangle so that its top-left corner lands in `(new_left, new_top)`, keeping its
    /// width and height.
    ///
    /// The right and bottom edges are shifted first, then left and top are overwritten, so the
    /// final left and top are exactly the requested values.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let mut rect = FloatRect::new(1.0, 1.0, 4.0, 4.0);
    /// rect.offset_to(10.0, 10.0);
    ///
    /// assert_eq!(rect, FloatRect::new(10.0, 10.0, 13.0, 13.0));
    /// ```
    pub fn offset_to(&mut self, new_left: f32, new_top: f32) {
        self.right += new_left - self.left;
        self.bottom += new_top - self.top;
        self.left = new_left;
        self.top = new_top;
    }

    /// Returns true if the point `(x, y)` is inside the rectangle.
    ///
    /// The left and top edges are considered inside, while the right and bottom are not, so a point
    /// is contained if `left <= x < right` and `top <= y < bottom`. An empty rectangle never
    /// contains any point.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    ///
    /// assert!(rect.contains(0.0, 0.0));
    /// assert!(rect.contains(9.999, 9.999));
    /// assert!(!rect.contains(10.0, 10.0));
    /// assert!(!FloatRect::new(5.0, 5.0, 5.0, 5.0).contains(5.0, 5.0));
    /// ```
    pub fn contains(&self, x: f32, y: f32) -> bool {
        // empty check first
        self.left < self.right
            && self.top < self.bottom
            && x >= self.left
            && x < self.right
            && y >= self.top
            && y < self.bottom
    }

    /// Same as [FloatRect::contains], taking the point as a [Point2].
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    ///
    /// assert!(rect.contains_point(&Point2::new(2.5, 7.5)));
    /// ```
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.contains(point.x, point.y)
    }

    /// Returns true if the rectangle described by the four given edges is inside or equal to this
    /// one.
    ///
    /// An empty rectangle never contains another rectangle. The given edges, instead, may describe
    /// an empty rectangle.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    ///
    /// assert!(rect.contains_edges(2.0, 2.0, 8.0, 8.0));
    /// assert!(!rect.contains_edges(2.0, 2.0, 12.0, 8.0));
    /// ```
    pub fn contains_edges(&self, left: f32, top: f32, right: f32, bottom: f32) -> bool {
        !self.is_empty()
            && self.left <= left
            && self.top <= top
            && self.right >= right
            && self.bottom >= bottom
    }

    /// Returns true if `other` is inside or equal to this rectangle.
    ///
    /// An empty rectangle never contains another rectangle.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let outer = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    /// let inner = FloatRect::new(2.0, 2.0, 8.0, 8.0);
    ///
    /// assert!(outer.contains_rect(&inner));
    /// assert!(!inner.contains_rect(&outer));
    /// ```
    pub fn contains_rect(&self, other: &FloatRect) -> bool {
        self.contains_edges(other.left, other.top, other.right, other.bottom)
    }

    /// Multiplies every edge by `factor`.
    ///
    /// A factor of exactly `1.0` leaves the rectangle untouched.
    /// # Examples
    /// ```
    /// use rectf::shapes::FloatRect;
    ///
    /// let mut rect = FloatRect::new(1.0, 2.0, 3.0, 4.0);
    /// rect.scale(2.0);
    ///
    /// assert_eq!(rect, FloatRect::new(2.0, 4.0, 6.0, 8.0));
    /// ```
    pub fn scale(&mut self, factor: f32) {
        #[cfg(debug_assertions)]
        {
            if !factor.is_finite() {
                log::warn!("Scaling FloatRect by a non-finite factor {}", factor);
            }
        }
        if factor != 1.0 {
            self.left *= factor;
            self.top *= factor;
            self.right *= factor;
            self.bottom *= factor;
        }
    }
}

impl From<IntegerRect> for FloatRect {
    fn from(rect: IntegerRect) -> Self {
        rect.to_float_rect()
    }
}

impl From<[f32; 4]> for FloatRect {
    fn from(values: [f32; 4]) -> Self {
        FloatRect::new(values[0], values[1], values[2], values[3])
    }
}

impl From<FloatRect> for [f32; 4] {
    fn from(rect: FloatRect) -> Self {
        [rect.left, rect.top, rect.right, rect.bottom]
    }
}

impl TryFrom<&[f32]> for FloatRect {
    type Error = ComponentCountError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        match values {
            [left, top, right, bottom] => Ok(FloatRect::new(*left, *top, *right, *bottom)),
            _ => Err(ComponentCountError {
                target: "FloatRect",
                found: values.len(),
            }),
        }
    }
}

impl std::fmt::Display for FloatRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FloatRect[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

overload!((a: ?FloatRect) + (b: ?Vec2) -> FloatRect {FloatRect{left:a.left+b.x,top:a.top+b.y,right:a.right+b.x,bottom:a.bottom+b.y}});
overload!((a: ?FloatRect) - (b: ?Vec2) -> FloatRect {FloatRect{left:a.left-b.x,top:a.top-b.y,right:a.right-b.x,bottom:a.bottom-b.y}});
overload!((a: ?FloatRect) * (b: f32) -> FloatRect {
    let mut ret = FloatRect::copy_from(&a);
    ret.scale(b);
    ret
});
overload!((a: &mut FloatRect) += (b: ?Vec2) {a.offset(b.x, b.y);});
overload!((a: &mut FloatRect) -= (b: ?Vec2) {a.offset(-b.x, -b.y);});
overload!((a: &mut FloatRect) *= (b: f32) {a.scale(b);});
