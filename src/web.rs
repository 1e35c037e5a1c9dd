// web.rs - Browser host and the JavaScript-facing `Wallpaper`
//
// The renderer lives in an `Rc<RefCell<Option<_>>>` shared with the two
// closures handed to the browser. The host holds the closure slots, so
// renderer -> host -> closure -> renderer is a cycle until `detach` empties
// the slots.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::RainConfig;
use crate::host::{FrameToken, Host, HostError};
use crate::render::{GlyphStyle, Surface};
use crate::renderer::{Renderer, State};
use crate::rng::XorShift32;
use crate::theme::{Rgba, Theme};

type Shared<T> = Rc<RefCell<Option<T>>>;
type Callback = Closure<dyn FnMut()>;
type WebRenderer = Renderer<WebHost, XorShift32>;

fn rejected(err: JsValue) -> HostError {
    HostError::Rejected(format!("{err:?}"))
}

struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    on_frame: Shared<Callback>,
    on_resize: Shared<Callback>,
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn surface(&mut self) -> Option<CanvasSurface> {
        let ctx = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface { canvas: self.canvas.clone(), ctx, font: String::new() })
    }

    fn viewport(&self) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    fn request_frame(&mut self) -> Result<FrameToken, HostError> {
        let slot = self.on_frame.borrow();
        let cb = slot.as_ref().ok_or(HostError::Detached)?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map(FrameToken)
            .map_err(rejected)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let _ = self.window.cancel_animation_frame(token.0);
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        let slot = self.on_resize.borrow();
        let cb = slot.as_ref().ok_or(HostError::Detached)?;
        self.window
            .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            .map_err(rejected)
    }

    fn unlisten_resize(&mut self) {
        if let Some(cb) = self.on_resize.borrow().as_ref() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last font set on the context
    font: String,
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // Resizing resets context state
        self.font.clear();
    }

    fn fade(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.as_css());
        self.ctx.fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn glyph(&mut self, glyph: char, x: f32, y: f32, style: GlyphStyle) {
        let weight = if style.bold { "bold " } else { "" };
        let font = format!("{weight}{}px monospace", style.size);
        if font != self.font {
            self.ctx.set_font(&font);
            self.font = font;
        }
        self.ctx.set_fill_style_str(&style.color.as_css());
        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x as f64, y as f64);
    }
}

/// Glyph rain bound to a canvas.
///
/// ```js
/// const wallpaper = new Wallpaper(canvas, "dark");
/// wallpaper.setTheme("light");
/// wallpaper.unmount();
/// ```
#[wasm_bindgen]
pub struct Wallpaper {
    renderer: Shared<WebRenderer>,
    on_frame: Shared<Callback>,
    on_resize: Shared<Callback>,
    theme: Cell<Theme>,
}

#[wasm_bindgen]
impl Wallpaper {
    /// Mount on `canvas`. `config` is an optional JSON object of tuning
    /// overrides; a malformed one throws. A canvas without a 2D context
    /// gives an inert wallpaper instead of an error.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        theme: &str,
        config: Option<String>,
    ) -> Result<Wallpaper, JsValue> {
        let cfg = match config.as_deref() {
            Some(json) => {
                RainConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => RainConfig::default(),
        };
        let theme = Theme::from_flag(theme);

        let wallpaper = Self {
            renderer: Rc::new(RefCell::new(None)),
            on_frame: Rc::new(RefCell::new(None)),
            on_resize: Rc::new(RefCell::new(None)),
            theme: Cell::new(theme),
        };

        let Some(window) = web_sys::window() else {
            return Ok(wallpaper);
        };

        // Sits behind the page and never takes pointer input
        let _ = canvas.style().set_property("pointer-events", "none");
        let _ = canvas.set_attribute("aria-hidden", "true");

        *wallpaper.on_frame.borrow_mut() = Some({
            let renderer = wallpaper.renderer.clone();
            Closure::wrap(Box::new(move || {
                if let Some(r) = renderer.borrow_mut().as_mut() {
                    r.on_frame();
                }
            }) as Box<dyn FnMut()>)
        });
        *wallpaper.on_resize.borrow_mut() = Some({
            let renderer = wallpaper.renderer.clone();
            Closure::wrap(Box::new(move || {
                if let Some(r) = renderer.borrow_mut().as_mut() {
                    r.on_resize();
                }
            }) as Box<dyn FnMut()>)
        });

        let host = WebHost {
            window,
            canvas,
            on_frame: wallpaper.on_frame.clone(),
            on_resize: wallpaper.on_resize.clone(),
        };
        let rng = XorShift32::from_unit(js_sys::Math::random());
        let mounted = Renderer::mount(host, cfg, theme, rng);
        let running = mounted.is_some();
        *wallpaper.renderer.borrow_mut() = mounted;

        if !running {
            wallpaper.detach();
        }
        Ok(wallpaper)
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, flag: &str) {
        let theme = Theme::from_flag(flag);
        self.theme.set(theme);
        if let Some(r) = self.renderer.borrow_mut().as_mut() {
            r.set_theme(theme);
        }
    }

    /// Flip light/dark and return the new theme name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        let theme = match self.renderer.borrow_mut().as_mut() {
            Some(r) => r.toggle_theme(),
            None => self.theme.get().toggled(),
        };
        self.theme.set(theme);
        theme.as_str().to_string()
    }

    pub fn theme(&self) -> String {
        self.theme.get().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.renderer
            .borrow()
            .as_ref()
            .is_some_and(|r| r.state() == State::Running)
    }

    #[wasm_bindgen(js_name = columnCount)]
    pub fn column_count(&self) -> u32 {
        self.renderer
            .borrow()
            .as_ref()
            .map_or(0, |r| r.rain().column_count() as u32)
    }

    /// Stop the animation and release the browser callbacks.
    pub fn unmount(&self) {
        self.detach();
    }

    fn detach(&self) {
        let renderer = self.renderer.borrow_mut().take();
        if let Some(r) = renderer {
            r.unmount();
        }
        self.on_frame.borrow_mut().take();
        self.on_resize.borrow_mut().take();
    }
}

impl Drop for Wallpaper {
    fn drop(&mut self) {
        self.detach();
    }
}
