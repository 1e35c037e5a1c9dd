// renderer.rs - The mounted background component
//
// Owns the host handles it acquires: the pending frame token and the resize
// registration. Both are released exactly once, by `unmount` or on drop,
// whichever comes first.

use tracing::{debug, info, warn};

use crate::config::RainConfig;
use crate::host::{FrameToken, Host};
use crate::render::Surface;
use crate::rng::RandomSource;
use crate::sim::GlyphRain;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

pub struct Renderer<H: Host, R: RandomSource> {
    host: H,
    surface: H::Surface,
    rain: GlyphRain,
    theme: Theme,
    rng: R,
    state: State,

    // Host handles
    pending: Option<FrameToken>,
    listening: bool,
}

impl<H: Host, R: RandomSource> Renderer<H, R> {
    /// Size the surface, lay out columns and start the frame loop.
    ///
    /// Returns `None` when the host has no usable surface or refuses one of
    /// its primitives; anything acquired up to that point is released.
    pub fn mount(mut host: H, cfg: RainConfig, theme: Theme, rng: R) -> Option<Self> {
        let Some(mut surface) = host.surface() else {
            debug!("no drawing surface, glyph rain disabled");
            return None;
        };

        let (w, h) = host.viewport();
        surface.resize(w, h);
        let rain = GlyphRain::new(cfg, w, h);

        if let Err(err) = host.listen_resize() {
            warn!(%err, "could not listen for resize, glyph rain disabled");
            return None;
        }

        let mut renderer = Self {
            host,
            surface,
            rain,
            theme,
            rng,
            state: State::Running,
            pending: None,
            listening: true,
        };

        match renderer.host.request_frame() {
            Ok(token) => renderer.pending = Some(token),
            Err(err) => {
                warn!(%err, "could not schedule first frame, glyph rain disabled");
                return None;
            }
        }

        info!(
            width = w,
            height = h,
            columns = renderer.rain.column_count(),
            %theme,
            "glyph rain mounted"
        );
        Some(renderer)
    }

    /// Animation callback: paint one frame and schedule the next.
    pub fn on_frame(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        self.pending = None;

        self.rain.tick(self.theme, &mut self.surface, &mut self.rng);

        match self.host.request_frame() {
            Ok(token) => self.pending = Some(token),
            Err(err) => {
                warn!(%err, "could not schedule next frame, stopping");
                self.release();
            }
        }
    }

    /// Resize callback: match the viewport and lay the columns out again.
    pub fn on_resize(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        let (w, h) = self.host.viewport();
        self.surface.resize(w, h);
        self.rain.resize(w, h);
        debug!(width = w, height = h, columns = self.rain.column_count(), "glyph rain resized");
    }

    /// Takes effect on the next frame.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(token) = self.pending.take() {
            self.host.cancel_frame(token);
        }
        if self.listening {
            self.host.unlisten_resize();
            self.listening = false;
        }
        if self.state == State::Running {
            self.state = State::Stopped;
            info!("glyph rain stopped");
        }
    }

    pub fn state(&self) -> State { self.state }
    pub fn theme(&self) -> Theme { self.theme }
    pub fn rain(&self) -> &GlyphRain { &self.rain }
    pub fn surface(&self) -> &H::Surface { &self.surface }
    pub fn surface_mut(&mut self) -> &mut H::Surface { &mut self.surface }
}

impl<H: Host, R: RandomSource> Drop for Renderer<H, R> {
    fn drop(&mut self) {
        self.release();
    }
}
