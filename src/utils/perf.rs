use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// Log how long the page took from navigation start to the load event.
///
/// When the load event has already finished the duration comes straight from
/// the timing API; otherwise a one-shot `load` listener reports once loading
/// ends. Without a performance API nothing is logged.
pub fn report_page_load() {
    if let Some(window) = web_sys::window() {
        if window.performance().is_none() {
            return;
        }
        let complete = window
            .document()
            .map(|doc| doc.ready_state() == "complete")
            .unwrap_or(false);
        if complete {
            log_duration();
        } else {
            let callback = Closure::<dyn Fn()>::new(log_duration);
            let _ = window
                .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
            callback.forget();
        }
    }
}

fn log_duration() {
    if let Some(performance) = web_sys::window().and_then(|window| window.performance()) {
        let timing = performance.timing();
        let load_end = timing.load_event_end();
        let duration = if load_end > 0.0 {
            load_end - timing.navigation_start()
        } else {
            // Inside the load handler the load-end mark is not committed
            // yet; elapsed time since navigation start is close enough
            performance.now()
        };
        log::info!("page loaded in {duration:.0}ms");
    }
}
