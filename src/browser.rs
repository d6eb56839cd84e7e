/// Bridge to the chrome.* extension APIs (see extension.js)
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = getSyncStorage)]
    pub(crate) async fn get_sync_storage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = setSyncStorage)]
    pub(crate) async fn set_sync_storage(items: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;

    fn closeWindow();
}

/// URL of the focused tab in the current window, if it has one
pub async fn active_tab_url() -> Result<Option<String>, String> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| format!("Failed to query tabs: {:?}", e))?;

    Ok(url_js.as_string().filter(|url| !url.is_empty()))
}

pub async fn open_options_page() {
    if let Err(e) = openOptionsPage().await {
        log::warn!("Failed to open options page: {:?}", e);
    }
}

/// Resolve after `ms` milliseconds
pub async fn delay(ms: u32) {
    if let Err(e) = sleep(ms).await {
        log::warn!("Timer failed: {:?}", e);
    }
}

pub fn close_popup() {
    closeWindow();
}
