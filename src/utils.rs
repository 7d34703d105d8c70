use crate::objects::{dashboard_config::CONFIG_ELEMENT_ID, DashboardConfig, JsError};
use wasm_bindgen::{closure::Closure, JsCast};
use yew::{Callback, Component, Context};

/// Reads the configuration embedded in the page; an absent element yields the defaults.
pub fn load_config() -> Result<DashboardConfig, JsError> {
    let document = web_sys::window()
        .ok_or("error getting window")?
        .document()
        .ok_or("error getting document")?;

    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => match element.text_content() {
            Some(json) if !json.trim().is_empty() => DashboardConfig::from_json(&json),
            _ => Ok(DashboardConfig::default()),
        },
        None => Ok(DashboardConfig::default()),
    }
}

/// Configuration provided by the application root, or the defaults outside of it.
pub fn config_of<C: Component>(ctx: &Context<C>) -> DashboardConfig {
    ctx.link()
        .context::<DashboardConfig>(Callback::noop())
        .map(|(config, _handle)| config)
        .unwrap_or_default()
}

/// Repeating browser timer; the interval is cleared when the value is dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn Fn()>,
}

impl Interval {
    pub fn new(millis: u32, callback: Callback<()>) -> Result<Self, JsError> {
        let closure = Closure::wrap(Box::new(move || callback.emit(())) as Box<dyn Fn()>);
        let handle = web_sys::window()
            .ok_or("error getting window")?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )?;

        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// Local wall clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn local_time_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Uniform sample in `[0, 1)`.
pub fn random_sample() -> f64 {
    js_sys::Math::random()
}
