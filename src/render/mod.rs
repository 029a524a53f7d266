//! Canvas 2d rendering module
//!
//! Splits shading math (pure, tested on native) from the wasm painter
//! that issues the actual canvas calls.

#[cfg(target_arch = "wasm32")]
pub mod painter;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub use painter::Painter;
