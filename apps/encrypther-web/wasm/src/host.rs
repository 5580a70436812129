//! `web-sys` implementation of the collector's host traits
//!
//! [`BrowserHost`] carries no state: every call looks up `window`,
//! `document` and `performance` afresh, so the handle is `Send` and can be
//! moved into deferred tasks.

use js_sys::{Array, Reflect};
use std::time::Duration;
use vitals_core::entry::{EntryType, NavigationTiming, PerformanceEntry};
use vitals_core::host::{EntryCallback, PageLifecycle, PerformanceHost, ReadyState, Task};
use vitals_core::ObserveError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PerformanceObserver, PerformanceObserverEntryList, Window};

#[wasm_bindgen]
extern "C" {
    // web-sys does not mark `observe` as throwing; older engines throw on unknown types
    #[wasm_bindgen(js_name = PerformanceObserver)]
    type CatchingObserver;

    #[wasm_bindgen(method, catch, js_name = observe)]
    fn try_observe(this: &CatchingObserver, options: &JsValue) -> Result<(), JsValue>;
}

/// Handle to the current page
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

fn window() -> Result<Window, ObserveError> {
    web_sys::window().ok_or_else(|| ObserveError::HostUnavailable("no window".to_string()))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn get_f64(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Translate a DOM performance entry into the collector's model
pub fn entry_from_js(entry_type: EntryType, value: &JsValue) -> Option<PerformanceEntry> {
    match entry_type {
        EntryType::LargestContentfulPaint => {
            // renderTime is 0 for cross-origin images without Timing-Allow-Origin
            let render_time = get_f64(value, "renderTime");
            let load_time = get_f64(value, "loadTime").unwrap_or(0.0);
            Some(PerformanceEntry::lcp(render_time, load_time))
        }
        EntryType::FirstInput => Some(PerformanceEntry::first_input(
            get_f64(value, "startTime")?,
            get_f64(value, "processingStart")?,
        )),
        EntryType::LayoutShift => {
            let had_recent_input = Reflect::get(value, &JsValue::from_str("hadRecentInput"))
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            Some(PerformanceEntry::layout_shift(
                get_f64(value, "value")?,
                had_recent_input,
            ))
        }
        EntryType::Paint => {
            let name = Reflect::get(value, &JsValue::from_str("name"))
                .ok()?
                .as_string()?;
            Some(PerformanceEntry::paint(name, get_f64(value, "startTime")?))
        }
        EntryType::Navigation => None,
    }
}

/// Fail early when `PerformanceObserver.supportedEntryTypes` leaves the type out
fn check_supported(entry_type: EntryType) -> Result<(), ObserveError> {
    let constructor = Reflect::get(&js_sys::global(), &JsValue::from_str("PerformanceObserver"))
        .map_err(|e| ObserveError::HostUnavailable(describe(&e)))?;
    if constructor.is_undefined() {
        return Err(ObserveError::HostUnavailable(
            "PerformanceObserver is not defined".to_string(),
        ));
    }
    let supported = Reflect::get(&constructor, &JsValue::from_str("supportedEntryTypes"))
        .ok()
        .and_then(|v| v.dyn_into::<Array>().ok());
    match supported {
        Some(types) if !types.includes(&JsValue::from_str(entry_type.as_str()), 0) => Err(
            ObserveError::unsupported(entry_type, "not listed in supportedEntryTypes"),
        ),
        _ => Ok(()),
    }
}

impl PerformanceHost for BrowserHost {
    fn observe(
        &self,
        entry_type: EntryType,
        buffered: bool,
        mut callback: EntryCallback,
    ) -> Result<(), ObserveError> {
        check_supported(entry_type)?;

        let handler = Closure::wrap(Box::new(move |list: PerformanceObserverEntryList| {
            let entries: Vec<PerformanceEntry> = list
                .get_entries()
                .iter()
                .filter_map(|entry| entry_from_js(entry_type, &entry))
                .collect();
            callback(&entries);
        }) as Box<dyn FnMut(PerformanceObserverEntryList)>);

        let observer = PerformanceObserver::new(handler.as_ref().unchecked_ref())
            .map_err(|e| ObserveError::unsupported(entry_type, describe(&e)))?;

        let options = js_sys::Object::new();
        Reflect::set(&options, &"type".into(), &entry_type.as_str().into())
            .and_then(|_| Reflect::set(&options, &"buffered".into(), &buffered.into()))
            .map_err(|e| ObserveError::unsupported(entry_type, describe(&e)))?;
        observer
            .unchecked_ref::<CatchingObserver>()
            .try_observe(&options)
            .map_err(|e| ObserveError::unsupported(entry_type, describe(&e)))?;

        // The observer lives for the rest of the page
        handler.forget();
        Ok(())
    }

    fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ObserveError> {
        let performance = window()?
            .performance()
            .ok_or_else(|| ObserveError::HostUnavailable("no performance".to_string()))?;
        let entries = performance.get_entries_by_type(EntryType::Navigation.as_str());
        let entry = entries.get(0);
        if entry.is_undefined() {
            return Ok(None);
        }
        match (
            get_f64(&entry, "requestStart"),
            get_f64(&entry, "responseStart"),
        ) {
            (Some(request_start), Some(response_start)) => Ok(Some(NavigationTiming {
                request_start,
                response_start,
            })),
            _ => Ok(None),
        }
    }
}

fn once_listener(task: Task) -> Closure<dyn FnMut(web_sys::Event)> {
    Closure::once(Box::new(move |_event: web_sys::Event| task()) as Box<dyn FnOnce(_)>)
}

impl PageLifecycle for BrowserHost {
    fn ready_state(&self) -> ReadyState {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| ReadyState::parse(&d.ready_state()))
            .unwrap_or(ReadyState::Complete)
    }

    fn on_dom_content_loaded(&self, task: Task) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let listener = once_listener(task);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
        {
            web_sys::console::warn_2(&"Failed to listen for DOMContentLoaded:".into(), &e);
            return;
        }
        listener.forget();
    }

    fn on_load(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = once_listener(task);
        if let Err(e) = window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref()) {
            web_sys::console::warn_2(&"Failed to listen for load:".into(), &e);
            return;
        }
        listener.forget();
    }

    fn set_timeout(&self, delay: Duration, task: Task) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let timer = Closure::once(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            timer.as_ref().unchecked_ref(),
            millis,
        ) {
            web_sys::console::warn_2(&"Failed to schedule timer:".into(), &e);
            return;
        }
        timer.forget();
    }
}
