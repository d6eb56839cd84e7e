/// Popup state: loading settings, the capture form and its submission

use crate::bookmark::{BookmarkRequest, SourceType};
use crate::client::{EntryApi, SubmitError};
use crate::settings::{Settings, StoredSettings};
use crate::status::StatusMessage;

/// Delay between a successful save and closing the popup
pub const CLOSE_DELAY_MS: u32 = 1000;

pub const SAVED_MESSAGE: &str = "Saved!";
pub const URL_REQUIRED_MESSAGE: &str = "URL is required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    /// Settings missing; only the setup prompt is shown
    Unconfigured,
    Ready,
    Submitting,
    /// Saved, waiting to close
    Saved,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureForm {
    phase: Phase,
    settings: Option<Settings>,
    pub url: String,
    pub title: String,
    pub source_type: SourceType,
    status: Option<StatusMessage>,
}

impl Default for CaptureForm {
    fn default() -> Self {
        Self::loading()
    }
}

impl CaptureForm {
    pub fn loading() -> Self {
        CaptureForm {
            phase: Phase::Loading,
            settings: None,
            url: String::new(),
            title: String::new(),
            source_type: SourceType::default(),
            status: None,
        }
    }

    /// Form state once stored settings are known.
    ///
    /// Incomplete settings give the setup prompt; otherwise the form is
    /// ready with the URL field set to `active_tab_url` as-is.
    pub fn from_stored(stored: &StoredSettings, active_tab_url: Option<String>) -> Self {
        match stored.complete() {
            Some(settings) => Self::ready(settings, active_tab_url),
            None => CaptureForm {
                phase: Phase::Unconfigured,
                ..Self::loading()
            },
        }
    }

    pub fn ready(settings: Settings, active_tab_url: Option<String>) -> Self {
        CaptureForm {
            phase: Phase::Ready,
            settings: Some(settings),
            url: active_tab_url.unwrap_or_default(),
            title: String::new(),
            source_type: SourceType::default(),
            status: None,
        }
    }

    /// Settings could not be read at all
    pub fn load_failed(message: impl Into<String>) -> Self {
        CaptureForm {
            phase: Phase::Unconfigured,
            status: Some(StatusMessage::error(message)),
            ..Self::loading()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn shows_setup_prompt(&self) -> bool {
        self.phase == Phase::Unconfigured
    }

    pub fn shows_form(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Submitting | Phase::Saved)
    }

    pub fn fields_editable(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Submitting => "Saving...",
            Phase::Saved | Phase::Closed => "Saved",
            _ => "Save",
        }
    }

    /// Milliseconds until the popup should close, once saved
    pub fn close_delay(&self) -> Option<u32> {
        (self.phase == Phase::Saved).then_some(CLOSE_DELAY_MS)
    }

    pub fn set_url(&mut self, url: String) {
        if self.fields_editable() {
            self.url = url;
        }
    }

    pub fn set_title(&mut self, title: String) {
        if self.fields_editable() {
            self.title = title;
        }
    }

    pub fn set_source_type(&mut self, source_type: SourceType) {
        if self.fields_editable() {
            self.source_type = source_type;
        }
    }

    /// Start a submission from `Ready`.
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// the form is not ready, or the URL is empty (the status says so).
    pub fn begin_submit(&mut self) -> Option<BookmarkRequest> {
        if self.phase != Phase::Ready || self.settings.is_none() {
            return None;
        }

        self.status = None;

        match BookmarkRequest::from_form(&self.url, &self.title, self.source_type) {
            Some(request) => {
                self.phase = Phase::Submitting;
                Some(request)
            }
            None => {
                self.status = Some(StatusMessage::error(URL_REQUIRED_MESSAGE));
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.phase != Phase::Submitting {
            return;
        }

        match result {
            Ok(()) => {
                log::info!("Laterfeed entry saved");
                self.phase = Phase::Saved;
                self.status = Some(StatusMessage::success(SAVED_MESSAGE));
            }
            Err(e) => {
                if let SubmitError::Transport(_) = &e {
                    log::error!("Laterfeed request failed: {}", e);
                } else {
                    log::warn!("Laterfeed rejected entry: {}", e);
                }
                self.phase = Phase::Ready;
                self.status = Some(StatusMessage::error(e.user_message()));
            }
        }
    }

    pub fn close(&mut self) {
        if self.phase == Phase::Saved {
            self.phase = Phase::Closed;
        }
    }
}

/// Run one submission against `api`.
///
/// `notify` sees the form after every state change, so a UI can render the
/// in-progress state while the request is pending.
pub async fn submit<A, F>(form: &mut CaptureForm, api: &A, notify: F)
where
    A: EntryApi + ?Sized,
    F: Fn(&CaptureForm),
{
    let Some(request) = form.begin_submit() else {
        notify(form);
        return;
    };
    notify(form);

    let result = api.create_entry(&request).await;
    form.finish_submit(result);
    notify(form);
}
