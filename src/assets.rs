use crate::constants::{ASSET_BASE_URL, TEMPLATE_PATH};
use blackhole_core::{AssetError, AssetGate, TextureKind};
use blackhole_gpu::DecodedImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_response(path: &str) -> Result<web::Response, AssetError> {
    let load_err = |reason: String| AssetError::Load {
        name: path.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| load_err("no window".into()))?;
    let url = format!("{ASSET_BASE_URL}{path}");
    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| load_err(format!("{e:?}")))?
        .dyn_into::<web::Response>()
        .map_err(|e| load_err(format!("{e:?}")))?;
    if !resp.ok() {
        return Err(load_err(format!("HTTP {}", resp.status())));
    }
    Ok(resp)
}

async fn fetch_text(path: &str) -> Result<String, AssetError> {
    let resp = fetch_response(path).await?;
    let promise = resp.text().map_err(|e| AssetError::Load {
        name: path.to_string(),
        reason: format!("{e:?}"),
    })?;
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| AssetError::Load {
            name: path.to_string(),
            reason: "body is not text".into(),
        })
}

async fn fetch_bytes(path: &str) -> Result<Vec<u8>, AssetError> {
    let resp = fetch_response(path).await?;
    let promise = resp.array_buffer().map_err(|e| AssetError::Load {
        name: path.to_string(),
        reason: format!("{e:?}"),
    })?;
    let buf = JsFuture::from(promise).await.map_err(|e| AssetError::Load {
        name: path.to_string(),
        reason: format!("{e:?}"),
    })?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch the template and every texture. Failures degrade to the fallback
/// program or a placeholder texture, so the gate always ends up ready.
pub async fn load_all() -> AssetGate<DecodedImage> {
    let mut gate = AssetGate::new();
    gate.provide_template(fetch_text(TEMPLATE_PATH).await);
    for kind in TextureKind::ALL {
        let decoded = match fetch_bytes(kind.file_name()).await {
            Ok(bytes) => blackhole_gpu::decode(kind, &bytes),
            Err(e) => Err(e),
        };
        gate.provide_texture_or(kind, decoded, DecodedImage::placeholder);
    }
    log::info!("[assets] ready={} missing={:?}", gate.is_ready(), gate.missing());
    gate
}
