//! Async image loading
//!
//! Every image request starts before any is awaited, so downloads run in
//! parallel. Each promise resolves on `load` and rejects on `error`; both
//! outcomes settle the key in the registry.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::asset_url;
use crate::assets::{AssetError, AssetRegistry};

/// Start loading one image; the returned promise settles with the element
fn start_image(url: &str) -> Result<(HtmlImageElement, Promise), JsValue> {
    let image = HtmlImageElement::new()?;
    let promise = {
        let image = image.clone();
        Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        })
    };
    image.set_src(url);
    Ok((image, promise))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| "image failed to load".to_string())
}

/// Load every key and settle it in `registry`. Returns the number that failed.
pub async fn load_all(
    keys: &[String],
    registry: Rc<RefCell<AssetRegistry<HtmlImageElement>>>,
) -> usize {
    registry.borrow_mut().request(keys.iter().cloned());

    let inflight: Vec<_> = keys
        .iter()
        .map(|key| (key, start_image(&asset_url(key))))
        .collect();

    let mut failed = 0;
    for (key, started) in inflight {
        let fail = |err: JsValue| AssetError::LoadFailed {
            key: key.clone(),
            reason: describe(&err),
        };
        let result = match started {
            Ok((image, promise)) => JsFuture::from(promise).await.map(|_| image).map_err(fail),
            Err(err) => Err(fail(err)),
        };
        if result.is_err() {
            failed += 1;
        }
        if let Err(e) = registry.borrow_mut().settle(key, result) {
            log::warn!("{}", e);
        }
    }

    let (settled, total) = registry.borrow().progress();
    log::info!("Assets settled: {}/{} ({} failed)", settled, total, failed);
    failed
}
