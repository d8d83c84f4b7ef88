//! GPU rendering subsystem.
//!
//! Renderers consume a `scene::DrawList` and issue wgpu commands. Each owns its
//! pipelines and buffers and (re)creates them lazily for the target format.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod canvas;
mod ctx;
pub mod shapes;

pub use canvas::CanvasLayer;
pub use ctx::{RenderCtx, RenderTarget};
