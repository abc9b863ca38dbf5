//! Browser glue: web-sys implementations of the page seams and event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `window`. It resolves the configured
//! elements, mounts the controllers once the document has parsed, and
//! attaches `showPopup`/`hidePopup` to `window` so inline markup handlers
//! (`onclick="showPopup()"`) can reach them.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, Storage, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::PageError;
use crate::popup::PopupController;
use crate::surface::{ClassTarget, ElementLookup, PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme_controller::ThemeController;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `localStorage`, or nothing when the browser denies access.
pub struct BrowserStorage(Option<Storage>);

impl BrowserStorage {
    pub fn from_window(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(e) => {
                log::warn!("localStorage unavailable: {}", js_error(&e));
                Self(None)
            }
        }
    }

    fn storage(&self) -> Result<&Storage, PageError> {
        self.0.as_ref().ok_or_else(|| PageError::Storage("localStorage unavailable".to_owned()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PageError::Storage(js_error(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PageError::Storage(js_error(&e)))
    }
}

impl ThemeRoot for Element {
    fn set_theme_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        self.set_attribute(name, value).map_err(|e| PageError::Dom(js_error(&e)))
    }
}

impl ToggleControl for HtmlInputElement {
    fn is_checked(&self) -> bool {
        HtmlInputElement::checked(self)
    }

    fn set_checked(&self, checked: bool) {
        HtmlInputElement::set_checked(self, checked);
    }
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) -> Result<(), PageError> {
        self.class_list().add_1(class).map_err(|e| PageError::Dom(js_error(&e)))
    }

    fn remove_class(&self, class: &str) -> Result<(), PageError> {
        self.class_list().remove_1(class).map_err(|e| PageError::Dom(js_error(&e)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// Live document lookup; ids are resolved on every call.
#[derive(Clone)]
pub struct BrowserDocument(Document);

impl ElementLookup for BrowserDocument {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }
}

/// Module entry point: install diagnostics, then mount once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = load_config(&document);
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
    }

    if document_is_loading(&document) {
        let on_ready = Closure::once_into_js(move || mount_logged(&config));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("could not wait for DOMContentLoaded: {}", js_error(&e));
        }
    } else {
        mount_logged(&config);
    }
}

/// Read the optional JSON override. Returns defaults plus the parse error on failure.
fn load_config(document: &Document) -> (PageConfig, Option<PageError>) {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (PageConfig::default(), None);
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}

fn init_logging(config: &PageConfig) {
    if let Err(e) = console_log::init_with_level(config.log_level.into()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger already set: {e}")));
    }
}

fn document_is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .map(|state| state.as_string().as_deref() == Some("loading"))
        .unwrap_or(false)
}

fn mount_logged(config: &PageConfig) {
    if let Err(e) = mount(config) {
        log::warn!("page controllers not mounted: {e}");
    }
}

/// Attach the popup globals and initialize the theme controller.
///
/// # Errors
///
/// Returns [`PageError::Dom`] when the window, document, or theme root is
/// unavailable or a listener cannot be registered.
pub fn mount(config: &PageConfig) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| PageError::Dom("no document".to_owned()))?;

    let popup = Rc::new(PopupController::new(config, BrowserDocument(document.clone())));
    expose_popup_globals(&window, &popup)?;

    let root = theme_root(&document)?;
    let toggle = find_toggle(&document, &config.toggle_id);
    let Some(controller) = ThemeController::init(config, BrowserStorage::from_window(&window), root, toggle) else {
        return Ok(());
    };

    let controller = Rc::new(controller);
    let handler = Rc::clone(&controller);
    let on_change = Closure::<dyn Fn()>::new(move || {
        handler.on_change();
    });
    controller
        .toggle()
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| PageError::Dom(js_error(&e)))?;
    on_change.forget();
    Ok(())
}

fn theme_root(document: &Document) -> Result<Element, PageError> {
    document
        .body()
        .map(Element::from)
        .or_else(|| document.document_element())
        .ok_or_else(|| PageError::MissingElement { id: "body".to_owned() })
}

fn find_toggle(document: &Document, id: &str) -> Option<HtmlInputElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(el) => {
            log::warn!("#{id} is a <{}>, not an input", el.tag_name().to_lowercase());
            None
        }
    }
}

fn expose_popup_globals(window: &Window, popup: &Rc<PopupController<BrowserDocument>>) -> Result<(), PageError> {
    let show = Rc::clone(popup);
    let hide = Rc::clone(popup);
    set_global(window, "showPopup", Closure::<dyn Fn()>::new(move || show.show()))?;
    set_global(window, "hidePopup", Closure::<dyn Fn()>::new(move || hide.hide()))?;
    Ok(())
}

fn set_global(window: &Window, name: &str, callback: Closure<dyn Fn()>) -> Result<(), PageError> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref())
        .map_err(|e| PageError::Dom(format!("window.{name}: {}", js_error(&e))))?;
    callback.forget();
    Ok(())
}
