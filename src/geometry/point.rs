use crate::geometry::vec::Vec2;
use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A location in a two dimensional space.
///
/// Point2 is kept separate from Vec2 because it represents a location, and not a displacement:
/// subtracting two points yields a Vec2, while adding a Vec2 to a point moves the point.
///
/// In the screen-like convention used by the rectangles of this crate, `x` grows towards the right
/// and `y` grows towards the bottom.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point2 {
    /// The horizontal coordinate of the point.
    pub x: f32,
    /// The vertical coordinate of the point.
    pub y: f32,
}

impl Point2 {
    /// Constructs a point in the origin, with coordinates `(0.0, 0.0)`
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// let p = Point2::zero();
    /// assert_eq!(p.x, 0.0);
    /// assert_eq!(p.y, 0.0);
    /// ```
    pub fn zero() -> Point2 {
        Point2 { x: 0., y: 0. }
    }

    /// Constructs a point with the given `(x, y)` coordinates
    /// # Examples
    /// ```
    /// use rectf::geometry::Point2;
    /// let p = Point2::new(3.5, -2.25);
    /// assert_eq!(p.x, 3.5);
    /// assert_eq!(p.y, -2.25);
    /// ```
    pub fn new(x: f32, y: f32) -> Point2 {
        Point2 { x, y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point2[{}, {}]", self.x, self.y)
    }
}

overload!((a: ?Point2) + (b: ?Vec2) -> Point2 {Point2{x:a.x+b.x,y:a.y+b.y}});
overload!((a: ?Point2) - (b: ?Vec2) -> Point2 {Point2{x:a.x-b.x,y:a.y-b.y}});
overload!((a: ?Point2) - (b: ?Point2) -> Vec2 {Vec2{x:a.x-b.x,y:a.y-b.y}});
overload!((a: &mut Point2) += (b: ?Vec2) {a.x+=b.x;a.y+=b.y;});
overload!((a: &mut Point2) -= (b: ?Vec2) {a.x-=b.x;a.y-=b.y;});
