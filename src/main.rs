use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

mod adapter;
mod env;
mod keys;
mod memory;
mod state;
mod styles;
mod util;

use util::clog;

fn main() {
    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Lifecycle signals and the first-frame hook register at load time; the
    // rest of the setup waits for the DOM when the script runs early.
    adapter::subscribe_lifecycle_events(&window);
    adapter::register_first_frame_hook(&window, &document);

    if document.ready_state() == "loading" {
        let w = window.clone();
        let d = document.clone();
        let on_ready = Closure::wrap(Box::new(move || {
            adapter::install(&w, &d);
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .ok();
        on_ready.forget();
    } else {
        adapter::install(&window, &document);
    }

    clog("Tizen compatibility layer loaded");
}
