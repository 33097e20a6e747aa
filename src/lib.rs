#![doc = include_str!("../README.md")]
#![allow(clippy::excessive_precision)]
#![allow(missing_docs)]

pub mod error;
pub mod function;
pub mod lobe;
pub mod preset;
pub mod spherical_harmonics;
