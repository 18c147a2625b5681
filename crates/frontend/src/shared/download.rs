//! Browser-side file download
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::api_utils::ApiError;

fn browser<E: std::fmt::Debug>(what: &'static str) -> impl FnOnce(E) -> ApiError {
    move |e| ApiError::Browser(format!("{}: {:?}", what, e))
}

/// Save `blob` as `filename` through a temporary hidden anchor.
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Browser("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(browser("create object URL"))?;

    let anchor = document
        .create_element("a")
        .map_err(browser("create anchor"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(browser("cast anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(browser("style anchor"))?;

    body.append_child(&anchor).map_err(browser("append anchor"))?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser("remove anchor"))?;

    Url::revoke_object_url(&url).map_err(browser("revoke URL"))?;
    log::debug!("downloaded {}", filename);
    Ok(())
}
