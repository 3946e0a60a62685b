//! Startup failures
//!
//! The game itself never fails; only bringing up the window and GPU can.

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[source] OsError),
    #[error("window was never created by the event loop")]
    NoWindow,
    #[error("failed to create surface: {0}")]
    Surface(#[source] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[source] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[source] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
}
