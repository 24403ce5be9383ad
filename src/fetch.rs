//! Browser transports for the startup loads.

use js_sys::{Promise, Uint8Array};
use viewer_core::error::Result;
use viewer_core::ViewerError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_network(e: JsValue) -> ViewerError {
    ViewerError::Network(format!("{:?}", e))
}

async fn fetch_ok(url: &str) -> Result<web::Response> {
    let window = web::window().ok_or_else(|| ViewerError::Network("no window".to_string()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_network)?
        .dyn_into()
        .map_err(js_network)?;
    if !resp.ok() {
        return Err(ViewerError::Http {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// `fetch` a resource as raw bytes; non-2xx statuses are errors.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = fetch_ok(url).await?;
    let buf = JsFuture::from(resp.array_buffer().map_err(js_network)?)
        .await
        .map_err(js_network)?;
    Ok(Uint8Array::new(&buf).to_vec())
}

pub async fn fetch_text(url: &str) -> Result<String> {
    let resp = fetch_ok(url).await?;
    JsFuture::from(resp.text().map_err(js_network)?)
        .await
        .map_err(js_network)?
        .as_string()
        .ok_or_else(|| ViewerError::Network(format!("{} returned a non-text body", url)))
}

/// Second transport for the point cloud: a plain XHR with an `ArrayBuffer` response.
pub async fn xhr_bytes(url: &str) -> Result<Vec<u8>> {
    let xhr = web::XmlHttpRequest::new().map_err(js_network)?;
    xhr.open_with_async("GET", url, true).map_err(js_network)?;
    xhr.set_response_type(web::XmlHttpRequestResponseType::Arraybuffer);

    let done = Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            _ = reject.call0(&JsValue::NULL);
        });
        xhr.set_onload(Some(onload.unchecked_ref()));
        xhr.set_onerror(Some(onerror.unchecked_ref()));
    });
    xhr.send().map_err(js_network)?;
    JsFuture::from(done)
        .await
        .map_err(|_| ViewerError::Network(format!("request for {} failed", url)))?;

    let status = xhr.status().map_err(js_network)?;
    if !(200..300).contains(&status) {
        return Err(ViewerError::Http {
            status,
            url: url.to_string(),
        });
    }
    let body = xhr.response().map_err(js_network)?;
    Ok(Uint8Array::new(&body).to_vec())
}
