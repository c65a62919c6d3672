use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::services::logging::Logger;

async fn write_text(text: &str) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| anyhow!("clipboard write rejected: {:?}", e))?;
    Ok(())
}

/// Fire-and-forget clipboard copy. Denied permissions only produce a console
/// warning; the promo dialog still shows the code for manual copying.
pub fn copy_text(text: String) {
    spawn_local(async move {
        if let Err(e) = write_text(&text).await {
            Logger::warn_with_component("clipboard", &format!("copy failed: {}", e));
        }
    });
}
