//! Basic value types shared by all figures

pub mod position;

pub use position::Position;
