//! The pyramid board: occupancy, support rule, placement and replacement.

pub mod pyramid;

pub use pyramid::{capacity, Position, PyramidBoard, ROW_CAPACITIES, ROWS, TOTAL_SLOTS};
