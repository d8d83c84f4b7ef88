//! Sandpaint engine crate.
//!
//! Platform and GPU runtime for the sketches: a winit window driven by a
//! continuous redraw loop, keyboard input, a frame clock, and wgpu renderers
//! for points and triangles drawn either straight to the surface or onto a
//! persistent canvas.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
