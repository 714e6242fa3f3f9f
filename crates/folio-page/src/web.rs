//! Browser binding: wires the engine and page state to the live document.
//!
//! Every section is optional. A page without a hero canvas or a contact form
//! still gets the remaining behaviour.

use crate::contact::{form_outcome, request_body, ContactForm};
use crate::hero::{EventQueue, QueuedFrames};
use crate::nav::{NavMenu, ACTIVE_CLASS};
use crate::scroll::{progress_transform, scroll_progress, ScrollToTop, VISIBLE_CLASS};
use crate::selectors;
use crate::skills::{SkillReplay, COLLAPSED_WIDTH, REPLAY_DELAY_MS};
use folio_canvas::{DrawingSurface, FieldConfig, HostEvent, ParticleWeb, RenderLoop};
use folio_core::{ContactSubmission, Dimensions, Rect, Rgba, Vec2};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement,
    HtmlElement, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry, MouseEvent,
    Request, RequestInit, Response, ScrollBehavior, ScrollToOptions, TouchEvent, Window,
};

/// `DrawingSurface` over a `<canvas>` 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d canvas context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn resize(&mut self, dimensions: Dimensions) {
        self.canvas.set_width(dimensions.width.max(0.0) as u32);
        self.canvas.set_height(dimensions.height.max(0.0) as u32);
    }

    fn clear(&mut self, region: Rect) {
        self.ctx
            .clear_rect(region.x, region.y, region.width, region.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;

    init_nav(&document)?;
    init_scroll(&window, &document)?;
    init_skills(&window, &document)?;
    init_contact_form(&document)?;
    init_hero(&window, &document, FieldConfig::default())?;
    Ok(())
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("could not set class '{}': {:?}", class, e);
    }
}

fn init_nav(document: &Document) -> Result<(), JsValue> {
    let hamburger = document.query_selector(selectors::HAMBURGER)?;
    let menu = document.query_selector(selectors::NAV_MENU)?;
    let (Some(hamburger), Some(menu)) = (hamburger, menu) else {
        log::warn!("navigation menu not found; skipping");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(NavMenu::new()));

    let on_toggle = {
        let state = state.clone();
        let targets = [hamburger.clone(), menu.clone()];
        Closure::<dyn FnMut()>::new(move || {
            let open = state.borrow_mut().toggle();
            for target in &targets {
                set_class(target, ACTIVE_CLASS, open);
            }
        })
    };
    hamburger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let links = document.query_selector_all(selectors::NAV_LINKS)?;
    for i in 0..links.length() {
        let Some(link) = links.get(i) else { continue };
        let state = state.clone();
        let targets = [hamburger.clone(), menu.clone()];
        let on_follow = Closure::<dyn FnMut()>::new(move || {
            state.borrow_mut().close();
            for target in &targets {
                set_class(target, ACTIVE_CLASS, false);
            }
        });
        link.add_event_listener_with_callback("click", on_follow.as_ref().unchecked_ref())?;
        on_follow.forget();
    }
    Ok(())
}

fn init_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let progress_bar = document
        .query_selector(selectors::SCROLL_PROGRESS)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let button = document.query_selector(selectors::SCROLL_TO_TOP)?;
    let mut state = ScrollToTop::new();

    let on_scroll = {
        let window = window.clone();
        let document = document.clone();
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let (Some(bar), Some(root)) = (&progress_bar, document.document_element()) {
                let progress = scroll_progress(
                    root.scroll_top() as f64,
                    root.scroll_height() as f64,
                    root.client_height() as f64,
                );
                if let Err(e) = bar
                    .style()
                    .set_property("transform", &progress_transform(progress))
                {
                    log::warn!("could not update scroll progress: {:?}", e);
                }
            }
            if let Some(button) = &button {
                if state.on_scroll(window.scroll_y().unwrap_or(0.0)) {
                    set_class(button, VISIBLE_CLASS, state.is_visible());
                }
            }
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    if let Some(button) = button {
        let window = window.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn init_skills(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(section) = document.query_selector(selectors::SKILLS)? else {
        log::warn!("skills section not found; skipping");
        return Ok(());
    };

    let on_intersect = {
        let window = window.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Err(e) = replay_skill_bars(&window, &entry) {
                        log::warn!("could not replay skill bars: {:?}", e);
                    }
                }
            },
        )
    };
    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    on_intersect.forget();
    observer.observe(&section);
    Ok(())
}

fn replay_skill_bars(window: &Window, entry: &IntersectionObserverEntry) -> Result<(), JsValue> {
    let list = entry.target().query_selector_all(selectors::SKILL_BARS)?;
    let bars: Vec<HtmlElement> = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let widths = bars
        .iter()
        .map(|bar| bar.style().get_property_value("width"))
        .collect::<Result<Vec<_>, _>>()?;
    let Some(replay) = SkillReplay::on_entry(entry.is_intersecting(), widths) else {
        return Ok(());
    };

    for bar in &bars {
        bar.style().set_property("width", COLLAPSED_WIDTH)?;
    }
    let restore = Closure::once_into_js(move || {
        for (bar, width) in bars.iter().zip(replay.widths()) {
            if let Err(e) = bar.style().set_property("width", width) {
                log::warn!("could not restore skill bar width: {:?}", e);
            }
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        REPLAY_DELAY_MS,
    )?;
    Ok(())
}

fn init_contact_form(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id(selectors::CONTACT_FORM_ID)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        log::warn!("contact form not found; skipping");
        return Ok(());
    };
    // A `data-endpoint` attribute on the form overrides the local relay
    let contact = match form.get_attribute("data-endpoint") {
        Some(endpoint) => ContactForm::with_endpoint(endpoint),
        None => ContactForm::new(),
    };

    let on_submit = {
        let form = form.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let submission = match web_sys::FormData::new_with_form(&form) {
                Ok(data) => contact.collect(|key| data.get(key).as_string()),
                Err(e) => {
                    log::error!("could not read contact form: {:?}", e);
                    return;
                }
            };
            let form = form.clone();
            let endpoint = contact.endpoint().to_string();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = form_outcome(post_submission(&endpoint, &submission).await);
                if let Some(window) = web_sys::window() {
                    window.alert_with_message(outcome.message()).ok();
                }
                if outcome.resets_form() {
                    form.reset();
                }
            });
        })
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

fn js_error(value: JsValue) -> String {
    format!("{:?}", value)
}

/// POST the submission as JSON and resolve to the response status
async fn post_submission(endpoint: &str, submission: &ContactSubmission) -> Result<u16, String> {
    let body = request_body(submission).map_err(|e| e.to_string())?;

    let headers = web_sys::Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| "no global window".to_string())?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;
    Ok(response.status())
}

fn container_size(hero: &HtmlElement) -> Dimensions {
    Dimensions::new(hero.offset_width() as f64, hero.offset_height() as f64)
}

fn surface_origin(canvas: &HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left(), rect.top())
}

fn init_hero(window: &Window, document: &Document, config: FieldConfig) -> Result<(), JsValue> {
    let hero = document
        .query_selector(selectors::HERO)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let canvas = document
        .get_element_by_id(selectors::HERO_CANVAS_ID)
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok());
    let (Some(hero), Some(canvas)) = (hero, canvas) else {
        log::warn!("hero canvas not found; skipping particle web");
        return Ok(());
    };

    let mut surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(container_size(&hero));
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let queue = EventQueue::new();
    let render = Rc::new(RefCell::new(RenderLoop::new(
        ParticleWeb::new(config, seed),
        surface,
        QueuedFrames::new(queue.clone()),
    )));

    let on_mouse_move = {
        let queue = queue.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            queue.push(HostEvent::PointerMove {
                client: Vec2::new(event.client_x() as f64, event.client_y() as f64),
                origin: surface_origin(&canvas),
            });
        })
    };
    hero.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;
    on_mouse_move.forget();

    let on_mouse_leave = {
        let queue = queue.clone();
        Closure::<dyn FnMut()>::new(move || queue.push(HostEvent::PointerLeave))
    };
    hero.add_event_listener_with_callback("mouseleave", on_mouse_leave.as_ref().unchecked_ref())?;
    on_mouse_leave.forget();

    // Must not be passive, or prevent_default cannot stop the page scrolling
    let on_touch_move = {
        let queue = queue.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            event.prevent_default();
            let list = event.touches();
            let touches = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|t| Vec2::new(t.client_x() as f64, t.client_y() as f64))
                .collect();
            queue.push(HostEvent::TouchMove {
                touches,
                origin: surface_origin(&canvas),
            });
        })
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    hero.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touch_move.as_ref().unchecked_ref(),
        &options,
    )?;
    on_touch_move.forget();

    let on_resize = {
        let queue = queue.clone();
        let hero = hero.clone();
        Closure::<dyn FnMut()>::new(move || queue.push(HostEvent::Resize(container_size(&hero))))
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // The frame callback reschedules itself, so it holds a handle to its own slot
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let scheduler = window.clone();
    *first.borrow_mut() = Some(Closure::new(move || {
        render.borrow_mut().tick();
        if let Some(callback) = frame.borrow().as_ref() {
            if let Err(e) = scheduler.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("could not schedule next frame: {:?}", e);
            }
        }
    }));
    if let Some(callback) = first.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
