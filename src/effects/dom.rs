//! Thin `web-sys` helpers shared by the registrars.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::EffectsError;

pub fn js_err(e: JsValue) -> EffectsError {
    EffectsError::Js(format!("{e:?}"))
}

/// Log a failed browser call instead of propagating it.
pub fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, EffectsError> {
    doc.get_element_by_id(id).ok_or_else(|| EffectsError::MissingElement { selector: format!("#{id}") })
}

/// Look up an element by id and check its concrete type.
pub fn by_id_as<T: JsCast>(doc: &Document, id: &str) -> Result<T, EffectsError> {
    by_id(doc, id)?
        .dyn_into::<T>()
        .map_err(|_| EffectsError::Js(format!("#{id} is not the expected element type")))
}

pub fn query_one(doc: &Document, selector: &str) -> Result<Element, EffectsError> {
    doc.query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| EffectsError::MissingElement { selector: selector.to_owned() })
}

pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, EffectsError> {
    let list = doc.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), EffectsError> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    warn_on_err(html.style().set_property(property, value), property);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    warn_on_err(el.class_list().toggle_with_force(class, on), class);
}

/// Build an observer that calls `on_visible` for each entry that starts
/// intersecting. The observer is not attached to anything yet.
pub fn intersection_observer(
    threshold: Option<f64>,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, EffectsError> {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init).map_err(js_err)?;
    cb.forget();
    Ok(observer)
}
