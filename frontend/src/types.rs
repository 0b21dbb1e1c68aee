//! View-model shared by the upload components.
//!
//! Wraps one [`Orchestrator`] per page and mirrors its phase into a
//! Leptos signal, so components render from signals and never borrow
//! the session directly.

use std::rc::Rc;

use leptos::*;
use snareshare::{AdFormData, Orchestrator, UploadPhase};

use crate::services::{read_file, FetchBackend};

/// Orchestrator owned by one page.
pub type PageOrchestrator = Rc<Orchestrator<FetchBackend>>;

/// Reactive handle over a page's upload session.
#[derive(Clone, Copy)]
pub struct UploadViewModel {
    /// Mirrors the orchestrator's phase after every change.
    pub phase: ReadSignal<UploadPhase>,
    /// A file has been read and selected.
    pub has_file: RwSignal<bool>,
    orchestrator: StoredValue<PageOrchestrator>,
}

impl UploadViewModel {
    /// `form` is `Some` for the ad-campaign page.
    pub fn new(form: Option<AdFormData>) -> Self {
        let (phase, set_phase) = create_signal(UploadPhase::Idle);
        let backend = FetchBackend::default();

        let orchestrator = match form {
            Some(form) => Orchestrator::with_ad_form(backend, form),
            None => Orchestrator::new(backend),
        }
        .with_observer(move |p| set_phase.set(p.clone()));

        Self {
            phase,
            has_file: create_rw_signal(false),
            orchestrator: store_value(Rc::new(orchestrator)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.with(UploadPhase::is_loading)
    }

    /// Drives the button's `disabled` state.
    pub fn can_trigger(&self) -> bool {
        self.has_file.get() && !self.is_loading()
    }

    pub fn button_label(&self) -> &'static str {
        self.phase.with(UploadPhase::button_label)
    }

    pub fn link(&self) -> Option<String> {
        self.phase.with(|p| p.link().map(String::from))
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.phase.with(UploadPhase::error_message)
    }

    /// Handle a pick. `None` means the picker was emptied.
    ///
    /// The previous file is dropped right away so a trigger during the
    /// read cannot send it. Reads that finish after a newer pick are
    /// discarded. The displayed link and error are kept until the next
    /// trigger.
    pub fn select(&self, file: Option<web_sys::File>) {
        let orchestrator = self.orchestrator.get_value();
        let has_file = self.has_file;

        let ticket = orchestrator.start_pick();
        has_file.set(false);

        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            match read_file(&file).await {
                Ok(selected) => {
                    if orchestrator.complete_pick(ticket, selected) {
                        has_file.set(true);
                    }
                }
                Err(e) => log::error!("❌ {}", e),
            }
        });
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut AdFormData)) {
        self.orchestrator.with_value(|o| o.update_form(edit));
    }

    /// Start an attempt. Ignored triggers are only logged.
    pub fn trigger(&self) {
        let orchestrator = self.orchestrator.get_value();
        spawn_local(async move {
            if let Err(e) = orchestrator.upload().await {
                log::debug!("⏭️  {}", e);
            }
        });
    }
}
