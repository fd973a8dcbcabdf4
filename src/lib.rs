pub mod board;
pub mod draw;
pub mod pattern;
