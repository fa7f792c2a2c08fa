/// Module containing the 2D locations and displacements used by the rectangles.
pub mod geometry;
/// Module containing axis aligned rectangles, in origin+extent and edge-coordinates form.
pub mod shapes;
