/// Popup UI: save the active tab to Laterfeed

use crate::bookmark::SourceType;
use crate::browser;
use crate::capture::{submit, CaptureForm, Phase};
use crate::client::EntriesClient;
use crate::settings::SettingsStore;
use crate::storage::ChromeSyncStore;
use crate::ui::components::{Field, SetupPrompt, StatusLine};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[function_component(Popup)]
pub fn popup() -> Html {
    let form = use_state(CaptureForm::loading);

    // Read settings and the active tab once, when the popup opens
    {
        let form = form.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                form.set(load_capture_form().await);
            });
            || ()
        });
    }

    let on_open_settings = Callback::from(|_: MouseEvent| {
        spawn_local(browser::open_options_page());
    });

    let on_url_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_url(input.value());
                form.set(next);
            }
        })
    };

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_title(input.value());
                form.set(next);
            }
        })
    };

    let on_source_type_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match select.value().parse::<SourceType>() {
                    Ok(source_type) => {
                        let mut next = (*form).clone();
                        next.set_source_type(source_type);
                        form.set(next);
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            let Some(settings) = next.settings().cloned() else {
                return;
            };
            let form = form.clone();

            spawn_local(async move {
                let client = EntriesClient::new(settings);
                submit(&mut next, &client, |state| form.set(state.clone())).await;

                if let Some(ms) = next.close_delay() {
                    browser::delay(ms).await;
                    next.close();
                    form.set(next);
                    browser::close_popup();
                }
            });
        })
    };

    let editable = form.fields_editable();

    html! {
        <div class="popup">
            <h1 class="popup-title">{"Save to Laterfeed"}</h1>

            {match form.phase() {
                Phase::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                Phase::Unconfigured => html! {
                    <SetupPrompt on_open_settings={on_open_settings.clone()} />
                },
                _ => html! {}
            }}

            if form.shows_form() {
                <div class="capture-form">
                    <Field label="URL" id="url">
                        <input
                            id="url"
                            type="url"
                            class="text-input"
                            value={form.url.clone()}
                            oninput={on_url_input}
                            disabled={!editable}
                        />
                    </Field>

                    <Field label="Title (optional)" id="title">
                        <input
                            id="title"
                            type="text"
                            class="text-input"
                            placeholder="Fetched from the page when empty"
                            value={form.title.clone()}
                            oninput={on_title_input}
                            disabled={!editable}
                        />
                    </Field>

                    <Field label="Type" id="source-type">
                        <select
                            id="source-type"
                            class="select-input"
                            onchange={on_source_type_change}
                            disabled={!editable}
                        >
                            {for SourceType::ALL.iter().map(|source_type| html! {
                                <option
                                    value={source_type.as_str()}
                                    selected={*source_type == form.source_type}
                                >
                                    {source_type.label()}
                                </option>
                            })}
                        </select>
                    </Field>

                    <Button
                        onclick={on_submit}
                        disabled={!form.submit_enabled()}
                        variant={ButtonVariant::Primary}
                        block={true}
                    >
                        {form.submit_label()}
                    </Button>
                </div>
            }

            <StatusLine status={form.status().cloned()} />

            if form.shows_form() {
                <p class="footer-popup">
                    <a href="#" onclick={on_open_settings.reform(|e: MouseEvent| {
                        e.prevent_default();
                        e
                    })}>{"Settings"}</a>
                </p>
            }
        </div>
    }
}

async fn load_capture_form() -> CaptureForm {
    let store = SettingsStore::new(ChromeSyncStore);

    let stored = match store.load().await {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Failed to load settings: {}", e);
            return CaptureForm::load_failed(format!("Failed to load settings: {}", e));
        }
    };

    if stored.complete().is_none() {
        return CaptureForm::from_stored(&stored, None);
    }

    let tab_url = match browser::active_tab_url().await {
        Ok(url) => url,
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    CaptureForm::from_stored(&stored, tab_url)
}
