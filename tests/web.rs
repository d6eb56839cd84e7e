//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use laterfeed_capture::capture::{CaptureForm, Phase};
use laterfeed_capture::settings::{SettingsDraft, SettingsStore, ValidationError};
use laterfeed_capture::storage::MemoryStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn saved_settings_open_a_ready_form() {
    let store = SettingsStore::new(MemoryStore::new());
    let draft = SettingsDraft {
        base_url: "https://feed.example.com/".to_string(),
        auth_token: "secret".to_string(),
    };

    store.save(&draft).await.unwrap();
    let stored = store.load().await.unwrap();
    let form = CaptureForm::from_stored(&stored, Some("https://example.com/a".to_string()));

    assert_eq!(form.phase(), Phase::Ready);
    assert_eq!(form.url, "https://example.com/a");
    assert_eq!(form.settings().unwrap().base_url, "https://feed.example.com");
}

#[wasm_bindgen_test]
async fn rejected_settings_leave_the_popup_unconfigured() {
    let store = SettingsStore::new(MemoryStore::new());
    let draft = SettingsDraft {
        base_url: "feed.example.com".to_string(),
        auth_token: "secret".to_string(),
    };

    let result = store.save(&draft).await;
    let stored = store.load().await.unwrap();

    assert_eq!(result.unwrap_err().to_string(), ValidationError::InvalidUrl.to_string());
    assert!(CaptureForm::from_stored(&stored, None).shows_setup_prompt());
}
