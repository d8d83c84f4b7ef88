//! Color model shared between applications and renderers.
//!
//! Colors are linear premultiplied RGBA. Constructors accept straight alpha,
//! sRGB-encoded components, or HSB.

pub mod color;

pub use color::{srgb_to_linear, Color};
