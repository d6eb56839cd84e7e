/// Options page: server URL and auth token

use crate::browser;
use crate::settings::{SettingsDraft, SettingsStore, SAVED_MESSAGE, STATUS_DISPLAY_MS};
use crate::status::StatusMessage;
use crate::storage::ChromeSyncStore;
use crate::ui::components::{Field, StatusLine};
use patternfly_yew::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(Options)]
pub fn options() -> Html {
    let draft = use_state(SettingsDraft::default);
    let status = use_state(|| None::<StatusMessage>);
    let saving = use_state(|| false);
    // Bumped on every status so an older timer never clears a newer status
    let status_generation = use_mut_ref(|| 0u32);

    // Pre-fill whatever is already stored
    {
        let draft = draft.clone();
        let status = status.clone();
        let status_generation = status_generation.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match SettingsStore::new(ChromeSyncStore).load().await {
                    Ok(stored) => draft.set(SettingsDraft::from(&stored)),
                    Err(e) => {
                        log::warn!("Failed to load settings: {}", e);
                        show_status(status, status_generation, StatusMessage::error(e.to_string())).await;
                    }
                }
            });
            || ()
        });
    }

    let on_base_url_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(SettingsDraft {
                    base_url: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_auth_token_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(SettingsDraft {
                    auth_token: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let status = status.clone();
        let saving = saving.clone();
        let status_generation = status_generation.clone();

        Callback::from(move |_: MouseEvent| {
            let candidate = (*draft).clone();
            let draft = draft.clone();
            let status = status.clone();
            let saving = saving.clone();
            let status_generation = status_generation.clone();

            saving.set(true);

            spawn_local(async move {
                let message = match SettingsStore::new(ChromeSyncStore).save(&candidate).await {
                    Ok(settings) => {
                        draft.set(SettingsDraft {
                            base_url: settings.base_url,
                            auth_token: settings.auth_token,
                        });
                        StatusMessage::success(SAVED_MESSAGE)
                    }
                    Err(e) => {
                        log::warn!("Settings not saved: {}", e);
                        e.to_status()
                    }
                };

                saving.set(false);
                show_status(status, status_generation, message).await;
            });
        })
    };

    html! {
        <div class="options">
            <h1 class="options-title">{"Laterfeed Settings"}</h1>

            <Field label="Base URL" id="base-url">
                <input
                    id="base-url"
                    type="url"
                    class="text-input"
                    placeholder="https://laterfeed.example.com"
                    value={draft.base_url.clone()}
                    oninput={on_base_url_input}
                />
            </Field>

            <Field label="Auth Token" id="auth-token">
                <input
                    id="auth-token"
                    type="password"
                    class="text-input"
                    value={draft.auth_token.clone()}
                    oninput={on_auth_token_input}
                />
            </Field>

            <Button onclick={on_save} disabled={*saving} variant={ButtonVariant::Primary}>
                {"Save"}
            </Button>

            <StatusLine status={(*status).clone()} />
        </div>
    }
}

/// Show `message`, then clear it after [`STATUS_DISPLAY_MS`] unless replaced
async fn show_status(
    status: UseStateHandle<Option<StatusMessage>>,
    generation: Rc<RefCell<u32>>,
    message: StatusMessage,
) {
    let current = {
        let mut generation = generation.borrow_mut();
        *generation += 1;
        *generation
    };

    status.set(Some(message));
    browser::delay(STATUS_DISPLAY_MS).await;

    if *generation.borrow() == current {
        status.set(None);
    }
}
