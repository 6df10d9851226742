//! DOM and platform glue: wires the detection, gesture, key, style and
//! diagnostic pieces to the browser. Everything here registers once and then
//! lives for the page lifetime; listener closures are leaked deliberately.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, Touch, TouchEvent, Window};

use crate::state::{Gesture, PinchTracker, TouchTracker};
use crate::styles::{self, TOUCH_ACTIVE_CLASS};
use crate::util::{clog, clog_err};
use crate::{env, keys, memory};

/// Manual collection hints, when the host exposes `window.gc`.
const GC_HINT_INTERVAL_MS: i32 = 30_000;
/// Heap usage log cadence.
const MEMORY_LOG_INTERVAL_MS: i32 = 60_000;

/// Page-ready install sequence. Both steps re-check the runtime themselves;
/// off a TV this is a no-op.
pub fn install(window: &Window, document: &Document) {
    optimize_for_tv(window, document);
    optimize_screen_size(window, document);
}

fn optimize_for_tv(window: &Window, document: &Document) {
    if !env::is_tv_runtime(window) {
        return;
    }
    clog("Tizen environment detected, applying optimizations");
    register_remote_keys(document);
    init_touch_support(document);
    schedule_gc_hints(window);
    schedule_memory_log(window);
}

/// Force the Full HD viewport the TV panel actually renders at, whatever the
/// device claims. No-op when the page carries no viewport meta tag.
fn optimize_screen_size(window: &Window, document: &Document) {
    if !env::is_tv_runtime(window) {
        return;
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"viewport\"]") {
        let _ = meta.set_attribute("content", env::TV_VIEWPORT_CONTENT);
    }
}

fn register_remote_keys(document: &Document) {
    let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if let Some(key) = keys::from_key_code(e.key_code()) {
            clog(&format!("{} pressed", key.label()));
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
        .ok();
    key_cb.forget();
}

fn touch_point(t: &Touch) -> (f64, f64) {
    (t.client_x() as f64, t.client_y() as f64)
}

/// Document-level touch listeners plus the feedback styles. Gesture state is
/// owned here and shared with the handlers through `Rc<RefCell<_>>` cells.
fn init_touch_support(document: &Document) {
    clog("initializing touch support");

    let tracker = Rc::new(RefCell::new(TouchTracker::default()));
    let pinch = Rc::new(RefCell::new(PinchTracker::default()));
    let active = Rc::new(RefCell::new(None::<HtmlElement>));

    let touch_start_cb = {
        let tracker = tracker.clone();
        let pinch = pinch.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let touches = e.touches();
            if let Some(t0) = touches.item(0) {
                let (x, y) = touch_point(&t0);
                tracker.borrow_mut().begin(x, y, js_sys::Date::now());
                if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
                    let _ = target.class_list().add_1(TOUCH_ACTIVE_CLASS);
                    *active.borrow_mut() = Some(target);
                }
                clog(&format!("touch start: ({}, {})", x, y));
            }
            if touches.length() == 2 {
                if let (Some(a), Some(b)) = (touches.item(0), touches.item(1)) {
                    pinch.borrow_mut().begin(touch_point(&a), touch_point(&b));
                    clog("pinch gesture started");
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    let touch_move_cb = {
        let tracker = tracker.clone();
        let pinch = pinch.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let touches = e.touches();
            if let Some(t0) = touches.item(0) {
                let (x, y) = touch_point(&t0);
                if tracker.borrow_mut().update(x, y) {
                    // scroll started; drop the feedback marker once
                    if let Some(el) = active.borrow_mut().take() {
                        let _ = el.class_list().remove_1(TOUCH_ACTIVE_CLASS);
                    }
                }
            }
            if touches.length() == 2 {
                if let (Some(a), Some(b)) = (touches.item(0), touches.item(1)) {
                    if let Some(scale) = pinch.borrow().scale(touch_point(&a), touch_point(&b)) {
                        clog(&format!("pinch scale: {:.2}", scale));
                    }
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    let touch_end_cb = {
        let tracker = tracker.clone();
        let pinch = pinch.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(el) = active.borrow_mut().take() {
                let _ = el.class_list().remove_1(TOUCH_ACTIVE_CLASS);
            }
            match tracker.borrow_mut().finish(js_sys::Date::now()) {
                Some(Gesture::Tap) => clog("tap detected"),
                Some(Gesture::LongPress) => clog("long press detected"),
                None => {}
            }
            pinch.borrow_mut().release(e.touches().length());
        }) as Box<dyn FnMut(_)>)
    };

    let touch_cancel_cb = {
        let tracker = tracker.clone();
        let pinch = pinch.clone();
        let active = active.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(el) = active.borrow_mut().take() {
                let _ = el.class_list().remove_1(TOUCH_ACTIVE_CLASS);
            }
            tracker.borrow_mut().cancel();
            pinch.borrow_mut().release(e.touches().length());
            clog("touch cancelled");
        }) as Box<dyn FnMut(_)>)
    };

    document
        .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
        .ok();
    document
        .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
        .ok();
    document
        .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
        .ok();
    document
        .add_event_listener_with_callback("touchcancel", touch_cancel_cb.as_ref().unchecked_ref())
        .ok();
    touch_start_cb.forget();
    touch_move_cb.forget();
    touch_end_cb.forget();
    touch_cancel_cb.forget();

    if styles::inject(document, styles::TOUCH_FEEDBACK_CSS).is_ok() {
        clog("touch feedback styles applied");
    }

    clog("touch support ready");
}

fn manual_gc_hook(window: &Window) -> Option<Function> {
    Reflect::get(window.as_ref(), &JsValue::from_str("gc"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

fn schedule_gc_hints(window: &Window) {
    let Some(gc) = manual_gc_hook(window) else {
        return;
    };
    let tick = Closure::wrap(Box::new(move || {
        let _ = gc.call0(&JsValue::NULL);
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            GC_HINT_INTERVAL_MS,
        )
        .ok();
    tick.forget();
}

fn schedule_memory_log(window: &Window) {
    if memory::read_heap_stats(window).is_none() {
        return;
    }
    let w = window.clone();
    let tick = Closure::wrap(Box::new(move || {
        if let Some(stats) = memory::read_heap_stats(&w) {
            clog(&format!(
                "memory usage: {}",
                serde_json::to_string(&stats).unwrap_or_default()
            ));
        }
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            MEMORY_LOG_INTERVAL_MS,
        )
        .ok();
    tick.forget();
}

/// Subscribe to the Tizen application lifecycle signals. Reaching the API can
/// throw on some firmwares; the failure is logged and setup continues.
pub fn subscribe_lifecycle_events(window: &Window) {
    if !Reflect::has(window.as_ref(), &JsValue::from_str("tizen")).unwrap_or(false) {
        return;
    }
    if let Err(e) = try_subscribe_lifecycle(window) {
        clog_err("tizen API access failed:", &e);
    }
}

fn try_subscribe_lifecycle(window: &Window) -> Result<(), JsValue> {
    let tizen = Reflect::get(window.as_ref(), &JsValue::from_str("tizen"))?;
    let application = Reflect::get(&tizen, &JsValue::from_str("application"))?;
    let get_current: Function =
        Reflect::get(&application, &JsValue::from_str("getCurrentApplication"))?.dyn_into()?;
    let app = get_current.call0(&application)?;
    let add_listener: Function =
        Reflect::get(&app, &JsValue::from_str("addEventListener"))?.dyn_into()?;

    let signals: [(&str, &'static str); 3] = [
        ("lowbattery", "low battery, enabling power save mode"),
        ("suspend", "application suspended"),
        ("resume", "application resumed"),
    ];
    for (signal, message) in signals {
        let cb = Closure::wrap(Box::new(move || clog(message)) as Box<dyn FnMut()>);
        add_listener.call2(&app, &JsValue::from_str(signal), cb.as_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Render tuning deferred until the hosted engine reports its first frame
/// (`flutter-first-frame`), rather than guessing with a fixed delay. One-shot
/// per event, best effort: nothing retries if the canvas shows up later.
pub fn register_first_frame_hook(window: &Window, document: &Document) {
    let w = window.clone();
    let d = document.clone();
    let cb = Closure::wrap(Box::new(move || {
        if !env::is_tv_runtime(&w) {
            return;
        }
        clog("first frame rendered, applying render tuning");
        let _ = styles::inject(&d, styles::CHART_SMOOTHING_CSS);
        tune_canvas_touch(&d);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("flutter-first-frame", cb.as_ref().unchecked_ref())
        .ok();
    cb.forget();
}

/// Let the rendering surface receive raw touch events instead of the
/// browser's default gestures.
fn tune_canvas_touch(document: &Document) {
    if let Ok(Some(el)) = document.query_selector("canvas") {
        if let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() {
            let _ = canvas.style().set_property("touch-action", "none");
            clog("canvas touch tuning applied");
        }
    }
}
