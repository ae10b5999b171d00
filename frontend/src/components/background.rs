use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::components::listener::Listener;
use crate::config;
use crate::particles::color::Rgb;
use crate::particles::device::NavigatorProfile;
use crate::particles::field::{FieldOptions, GradientStop, ParticleField, Surface};
use crate::particles::transition::Palette;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas element is not mounted")]
    MissingCanvas,
    #[error("2d drawing context is unavailable")]
    ContextUnavailable,
    #[error("no browser window")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        CanvasError::Js(format!("{:?}", value))
    }
}

/// Which backdrop to draw. Only `Particles` reacts to pointer and scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundKind {
    #[default]
    Particles,
    Ambient,
}

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    #[prop_or_default]
    pub kind: BackgroundKind,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
    #[prop_or(AttrValue::Static("#000000"))]
    pub background_color: AttrValue,
    #[prop_or(1.0)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl Surface for CanvasSurface<'_> {
    fn fill_background(&mut self, color: Rgb, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_gradient(&mut self, width: f64, height: f64, radius: f64, stops: &[GradientStop]) {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let gradient = match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(1.0)) {
            Ok(gradient) => gradient,
            Err(e) => {
                debug!("radial gradient unavailable: {:?}", e);
                return;
            }
        };
        for stop in stops.iter().filter(|stop| stop_in_range(stop)) {
            if let Err(e) = gradient.add_color_stop(stop.offset, stop.css) {
                debug!("gradient stop {} rejected: {:?}", stop.css, e);
            }
        }
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_global_alpha(alpha);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running animation. Dropping it cancels the pending frame and detaches
/// every listener.
struct AnimationLoop {
    frame: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
    _listeners: Vec<Listener>,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.handle.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.frame.borrow_mut().take();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// `addColorStop` throws for offsets outside [0, 1].
fn stop_in_range(stop: &GradientStop) -> bool {
    let ok = (0.0..=1.0).contains(&stop.offset);
    if !ok {
        debug!("gradient stop {} skipped: offset {} out of range", stop.css, stop.offset);
    }
    ok
}

/// Whole-pixel canvas size for a layout box; fractional pixels are dropped.
fn canvas_size(layout_width: f64, layout_height: f64) -> (u32, u32) {
    let whole = |v: f64| if v.is_finite() { v.max(0.0).floor() as u32 } else { 0 };
    (whole(layout_width), whole(layout_height))
}

/// Sizes the backing store to the element and returns the size the engine
/// must use, which is the backing store's.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = canvas_size(rect.width(), rect.height());
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f64, height as f64)
}

fn scroll_source() -> Option<web_sys::Element> {
    window()?
        .document()?
        .query_selector(&format!(".{}", config::SCROLL_CONTAINER_CLASS))
        .ok()
        .flatten()
}

fn start(
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<Option<ParticleField>>>,
    palette: Palette,
    options: FieldOptions,
) -> Result<AnimationLoop, CanvasError> {
    let window = window().ok_or(CanvasError::NoWindow)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(CanvasError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CanvasError::ContextUnavailable)?;

    let (width, height) = fit_canvas(&canvas);
    {
        let mut slot = field.borrow_mut();
        match slot.as_mut() {
            Some(existing) => {
                existing.set_options(options);
                existing.resize(width, height);
            }
            None => {
                let created = ParticleField::new(width, height, palette, options, &NavigatorProfile);
                info!(
                    "particle background started: {}x{} with {} particles (low end: {})",
                    width,
                    height,
                    created.particles().len(),
                    created.is_low_end()
                );
                *slot = Some(created);
            }
        }
    }

    let mut listeners = Vec::new();

    {
        let field = field.clone();
        let canvas = canvas.clone();
        listeners.push(Listener::attach(&window, "mousemove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let rect = canvas.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                if let Some(field) = field.borrow_mut().as_mut() {
                    field.pointer_moved(x, y);
                }
            }
        })?);
    }

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let field = field.clone();
        listeners.push(Listener::attach(&root, "mouseleave", move |_| {
            if let Some(field) = field.borrow_mut().as_mut() {
                field.pointer_left();
            }
        })?);
    }

    {
        let field = field.clone();
        match scroll_source() {
            Some(container) => {
                let source = container.clone();
                listeners.push(Listener::attach(&container, "scroll", move |_| {
                    let top = source.scroll_top() as f64;
                    if let Some(field) = field.borrow_mut().as_mut() {
                        field.scrolled_to(top);
                    }
                })?);
            }
            None => {
                let source = window.clone();
                listeners.push(Listener::attach(&window, "scroll", move |_| {
                    let top = source.scroll_y().unwrap_or(0.0);
                    if let Some(field) = field.borrow_mut().as_mut() {
                        field.scrolled_to(top);
                    }
                })?);
            }
        }
    }

    {
        let field = field.clone();
        let canvas = canvas.clone();
        listeners.push(Listener::attach(&window, "resize", move |_| {
            let (width, height) = fit_canvas(&canvas);
            if let Some(field) = field.borrow_mut().as_mut() {
                field.resize(width, height);
                debug!("particle background resized to {}x{}", width, height);
            }
        })?);
    }

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    {
        let frame_ref = frame.clone();
        let handle = handle.clone();
        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            if let Some(field) = field.borrow_mut().as_mut() {
                field.frame(&mut CanvasSurface { ctx: &ctx });
            }
            if let Some(callback) = frame_ref.borrow().as_ref() {
                handle.set(request_frame(callback));
            }
        }));
    }
    if let Some(callback) = frame.borrow().as_ref() {
        handle.set(request_frame(callback));
    }

    Ok(AnimationLoop {
        frame,
        handle,
        _listeners: listeners,
    })
}

/// Full-size canvas backdrop. Colour changes fade in place; changing the
/// kind or speed restarts the loop but keeps the current fade.
#[function_component(DynamicBackground)]
pub fn dynamic_background(props: &BackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let field = use_mut_ref(|| None::<ParticleField>);
    let palette = Palette::from_hex(&props.color, &props.background_color);
    let options = FieldOptions {
        speed: props.speed,
        interactive: props.kind == BackgroundKind::Particles,
    };

    {
        let field = field.clone();
        use_effect_with_deps(
            move |palette: &Palette| {
                if let Some(field) = field.borrow_mut().as_mut() {
                    if field.retarget(*palette) {
                        debug!("particle background fading to {}", palette.color.to_hex());
                    }
                }
                || ()
            },
            palette,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with_deps(
            move |options: &FieldOptions| {
                let running = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(CanvasError::MissingCanvas)
                    .and_then(|canvas| start(canvas, field, palette, *options));
                let running = match running {
                    Ok(running) => Some(running),
                    Err(e) => {
                        debug!("particle background disabled: {}", e);
                        None
                    }
                };
                move || drop(running)
            },
            options,
        );
    }

    html! {
        <canvas ref={canvas_ref} class={classes!("particle-canvas", props.class.clone())} />
    }
}
