//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.
//! The frame index doubles as the sketch's animation counter.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
