use thiserror::Error;

/// Failures while bringing up the window's graphics stack. All of them are
/// fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create a rendering surface for the window")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter compatible with the window surface")]
    NoAdapter,
    #[error("failed to create the graphics device")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("the window surface reports no supported texture formats")]
    NoSurfaceFormat,
}
