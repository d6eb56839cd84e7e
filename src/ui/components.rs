/// Reusable UI components

use crate::status::{StatusKind, StatusMessage};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    #[prop_or_default]
    pub status: Option<StatusMessage>,
}

/// Inline status under a form; renders nothing when there is no status
#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    match &props.status {
        Some(status) => {
            let alert_type = match status.kind {
                StatusKind::Success => AlertType::Success,
                StatusKind::Error => AlertType::Danger,
            };

            html! {
                <div class="status">
                    <Alert r#type={alert_type} title={status.text.clone()} inline={true}>
                    </Alert>
                </div>
            }
        }
        None => html! {
            <div class="status"></div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct SetupPromptProps {
    pub on_open_settings: Callback<MouseEvent>,
}

#[function_component(SetupPrompt)]
pub fn setup_prompt(props: &SetupPromptProps) -> Html {
    let onclick = {
        let on_open_settings = props.on_open_settings.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_settings.emit(e);
        })
    };

    html! {
        <div class="setup-prompt">
            <p>{"Laterfeed is not configured yet."}</p>
            <p>
                <a href="#" {onclick}>{"Open settings"}</a>
                {" to enter your server URL and auth token."}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub children: Children,
}

/// Label stacked above its control
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div class="field">
            <label for={props.id.clone()}>{props.label.to_string()}</label>
            {props.children.clone()}
        </div>
    }
}
