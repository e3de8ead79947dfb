//! Market structure: swing points, support and resistance

pub mod support_resistance;

pub use support_resistance::*;
