//! Upload session state.
//!
//! One [`UploadSession`] value holds everything a surface renders: the
//! selected file, the optional ad form and the [`UploadPhase`]. The
//! phase is an enum so "loading with an error" or "loading with a link"
//! cannot be expressed.
//!
//! ```text
//!   Idle ──begin──▶ Loading ──finish──▶ Succeeded(link) ─┐
//!    ▲                 │      └────────▶ Failed(error) ───┤
//!    └──── abort ──────┘                                  │
//!                      ▲──────────────begin───────────────┘
//! ```

use crate::config::{UPLOADING_LABEL, UPLOAD_LABEL};
use crate::error::{TriggerError, UploadError, UploadResult};
use crate::models::{AdFormData, SelectedFile};

// =============================================================================
// Phase
// =============================================================================

/// Where the session stands in the upload lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Loading,
    /// Holds the download URL, verbatim.
    Succeeded(String),
    /// Holds the tagged step failure; the user sees a generic message.
    Failed(UploadError),
}

impl UploadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadPhase::Loading)
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            UploadPhase::Succeeded(link) => Some(link),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&UploadError> {
        match self {
            UploadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// User-facing error text, if the last attempt failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(UploadError::user_message)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            UPLOADING_LABEL
        } else {
            UPLOAD_LABEL
        }
    }
}

// =============================================================================
// Job
// =============================================================================

/// Snapshot taken when an attempt starts.
///
/// The workflow runs on this copy, so picking another file or editing
/// the form mid-flight does not affect the attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadJob {
    pub file: SelectedFile,
    /// Present only in the ad-campaign flow.
    pub form: Option<AdFormData>,
}

// =============================================================================
// Session
// =============================================================================

/// All transient state of one upload surface.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    selected: Option<SelectedFile>,
    form: Option<AdFormData>,
    phase: UploadPhase,
    /// Incremented by every [`start_pick`](Self::start_pick).
    pick: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for the ad-campaign flow, starting from an empty form.
    pub fn with_form(form: AdFormData) -> Self {
        Self {
            form: Some(form),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> Option<&AdFormData> {
        self.form.as_ref()
    }

    /// Replace the selected file. The phase is left alone: a previous
    /// link or error stays visible until the next trigger.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Begin an asynchronous pick. The current file is dropped at once
    /// and the returned ticket identifies this pick.
    pub fn start_pick(&mut self) -> u64 {
        self.pick += 1;
        self.selected = None;
        self.pick
    }

    /// Land the file read for `ticket`. Returns `false` and leaves the
    /// selection alone when a newer pick has started since.
    pub fn complete_pick(&mut self, ticket: u64, file: SelectedFile) -> bool {
        if ticket != self.pick {
            return false;
        }
        self.selected = Some(file);
        true
    }

    /// Mutable access to the ad form, if this session has one.
    pub fn form_mut(&mut self) -> Option<&mut AdFormData> {
        self.form.as_mut()
    }

    pub fn set_form(&mut self, form: Option<AdFormData>) {
        self.form = form;
    }

    /// Remove the ad form, turning the session into the share-link flow.
    pub fn take_form(&mut self) -> Option<AdFormData> {
        self.form.take()
    }

    /// A trigger would start an attempt.
    pub fn can_trigger(&self) -> bool {
        self.selected.is_some() && !self.phase.is_loading()
    }

    /// Enter `Loading` and snapshot the job.
    ///
    /// Returns an error and leaves the session untouched when no file
    /// is selected or an attempt is already in flight.
    pub fn begin(&mut self) -> Result<UploadJob, TriggerError> {
        if self.phase.is_loading() {
            return Err(TriggerError::AlreadyInFlight);
        }
        let file = self.selected.clone().ok_or(TriggerError::NoFileSelected)?;

        self.phase = UploadPhase::Loading;
        Ok(UploadJob {
            file,
            form: self.form.clone(),
        })
    }

    /// Settle the in-flight attempt.
    ///
    /// Ignored unless the session is `Loading`.
    pub fn finish(&mut self, outcome: UploadResult<String>) {
        if !self.phase.is_loading() {
            return;
        }
        self.phase = match outcome {
            Ok(link) => UploadPhase::Succeeded(link),
            Err(err) => UploadPhase::Failed(err),
        };
    }

    /// Drop an attempt that never settled. Returns whether anything changed.
    pub fn abort(&mut self) -> bool {
        if self.phase.is_loading() {
            self.phase = UploadPhase::Idle;
            true
        } else {
            false
        }
    }
}
