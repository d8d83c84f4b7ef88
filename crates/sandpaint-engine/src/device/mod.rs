//! GPU device + surface management.
//!
//! - `Gpu` creates the wgpu Instance/Adapter/Device/Queue and configures the
//!   window surface
//! - frames are acquired as `GpuFrame`s carrying an encoder and a view
//! - surface errors are mapped to a `SurfaceErrorAction` the loop can act on

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
