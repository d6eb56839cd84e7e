/// Laterfeed Capture - Chrome Extension for saving pages to Laterfeed
/// Built with Rust + WASM + Yew

pub mod bookmark;
mod browser;
pub mod capture;
pub mod client;
pub mod settings;
pub mod status;
pub mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::Popup>::new().render();
}

// Start the Yew app for the options page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::Options>::new().render();
}
