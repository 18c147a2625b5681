//! Binding to the Google Identity Services sign-in widget.
//!
//! The widget script (`https://accounts.google.com/gsi/client`) is loaded
//! asynchronously by `index.html`, so callers wait for
//! `google.accounts.id` to appear before rendering the button.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

const POLL_INTERVAL_MS: u32 = 100;
const POLL_ATTEMPTS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("El servicio de inicio de sesión no está disponible.")]
    NotLoaded,
    #[error("Falta el identificador de cliente OAuth en la configuración.")]
    MissingClientId,
    #[error("Error del widget de inicio de sesión: {0}")]
    Widget(String),
    #[error("Respuesta del widget no válida: {0}")]
    Payload(String),
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &HtmlElement, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = disableAutoSelect)]
    fn gis_disable_auto_select() -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct InitOptions<'a> {
    client_id: &'a str,
    auto_select: bool,
    cancel_on_tap_outside: bool,
}

#[derive(Serialize)]
struct ButtonOptions {
    theme: &'static str,
    size: &'static str,
    text: &'static str,
    shape: &'static str,
    locale: &'static str,
}

/// Payload handed to the `initialize` callback.
#[derive(Debug, Deserialize)]
struct CredentialResponse {
    credential: String,
}

thread_local! {
    // The widget keeps calling the last registered callback; it lives here
    // until the next `render_sign_in_button` replaces it.
    static CALLBACK: RefCell<Option<Closure<dyn Fn(JsValue)>>> = const { RefCell::new(None) };
}

fn js_error(e: JsValue) -> IdentityError {
    IdentityError::Widget(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// `true` once `window.google.accounts.id` exists.
pub fn is_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    ["google", "accounts", "id"]
        .iter()
        .try_fold(JsValue::from(window), |obj, key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

/// Poll until the widget script has loaded, for at most five seconds.
pub async fn wait_until_loaded() -> Result<(), IdentityError> {
    for _ in 0..POLL_ATTEMPTS {
        if is_loaded() {
            return Ok(());
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
    if is_loaded() {
        Ok(())
    } else {
        Err(IdentityError::NotLoaded)
    }
}

/// Initialise the widget and draw its button inside `container`.
/// `on_credential` receives the provider token of every completed sign-in.
pub fn render_sign_in_button(
    container: &HtmlElement,
    client_id: &str,
    on_credential: impl Fn(Result<String, IdentityError>) + 'static,
) -> Result<(), IdentityError> {
    if client_id.trim().is_empty() {
        return Err(IdentityError::MissingClientId);
    }
    if !is_loaded() {
        return Err(IdentityError::NotLoaded);
    }

    let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
        let result = serde_wasm_bindgen::from_value::<CredentialResponse>(payload)
            .map(|r| r.credential)
            .map_err(|e| IdentityError::Payload(e.to_string()));
        on_credential(result);
    });

    let config = serde_wasm_bindgen::to_value(&InitOptions {
        client_id: client_id.trim(),
        auto_select: false,
        cancel_on_tap_outside: true,
    })
    .map_err(|e| IdentityError::Widget(e.to_string()))?;
    js_sys::Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref())
        .map_err(js_error)?;
    gis_initialize(&config).map_err(js_error)?;

    let options = serde_wasm_bindgen::to_value(&ButtonOptions {
        theme: "outline",
        size: "large",
        text: "signin_with",
        shape: "rectangular",
        locale: "es",
    })
    .map_err(|e| IdentityError::Widget(e.to_string()))?;
    gis_render_button(container, &options).map_err(js_error)?;

    CALLBACK.with(|slot| *slot.borrow_mut() = Some(callback));
    Ok(())
}

/// Stop the widget from silently signing the same account back in.
pub fn disable_auto_select() {
    if !is_loaded() {
        return;
    }
    if let Err(e) = gis_disable_auto_select() {
        log::warn!("disableAutoSelect failed: {:?}", e);
    }
}
