pub mod ascii_utils;
pub mod bitmap;
pub mod board;
pub mod cell;
pub mod direction;
pub mod error;
pub mod generator;
pub mod json_utils;
pub mod painter;
