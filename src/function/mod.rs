//! Pure numeric functions.

pub mod sqrt;
