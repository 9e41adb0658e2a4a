pub mod morph;

pub use morph::MorphEngine;
