mod error;
pub use crate::shapes::error::ComponentCountError;
mod rect;
pub use crate::shapes::rect::IntegerRect;
mod rectf;
pub use crate::shapes::rectf::FloatRect;

#[cfg(test)]
mod tests;
