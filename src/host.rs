// host.rs - What the environment must provide
//
// A drawing surface, the viewport size, a once-per-refresh callback and a
// resize notification. The browser is one host; tests use a scripted one.

use std::fmt;

use crate::render::Surface;

/// Handle for a scheduled animation frame, as returned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken(pub i32);

pub trait Host {
    type Surface: Surface;

    /// The drawing surface, or `None` if it cannot be drawn on.
    fn surface(&mut self) -> Option<Self::Surface>;

    /// Current viewport size in logical pixels.
    fn viewport(&self) -> (u32, u32);

    /// Schedule one callback for the next display refresh.
    fn request_frame(&mut self) -> Result<FrameToken, HostError>;

    fn cancel_frame(&mut self, token: FrameToken);

    /// Start delivering window resize notifications.
    fn listen_resize(&mut self) -> Result<(), HostError>;

    fn unlisten_resize(&mut self);
}

/// A host primitive failed.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The callback the primitive needs has already been dropped.
    Detached,
    /// The host rejected the call.
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => write!(f, "host callback already released"),
            Self::Rejected(msg) => write!(f, "host rejected call: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}
