mod point;
pub use self::point::Point2;
mod vec;
pub use self::vec::Vec2;

#[cfg(test)]
mod tests;
