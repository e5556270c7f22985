//! Turns rendered export payloads into a browser download via a blob
//! object URL and a transient anchor element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Gagal membuat blob: {:?}", e))?;
    download_blob(&blob, filename)
}

pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Gagal membuat blob: {:?}", e))?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Gagal membuat object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Gagal membuat anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Gagal cast ke anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Gagal menyembunyikan anchor: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Gagal menambah anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Gagal menghapus anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Gagal melepas URL: {:?}", e))?;
    Ok(())
}
