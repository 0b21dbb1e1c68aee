//! Upload orchestrator.
//!
//! Owns an [`UploadSession`] and a [`Backend`] and drives one attempt at
//! a time. The session sits in a `RefCell`; no borrow is held across an
//! `.await`, so surfaces can read state while an attempt is suspended.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use snareshare::{HttpBackend, Orchestrator, SelectedFile, API_BASE_URL};
//!
//! let orchestrator = Orchestrator::new(HttpBackend::new(API_BASE_URL));
//! orchestrator.select_file(SelectedFile::from_path("set.als").await?);
//! orchestrator.upload().await?;
//! println!("{}", orchestrator.link().unwrap_or_default());
//! ```

use std::cell::{Ref, RefCell};

use crate::api::Backend;
use crate::error::TriggerError;
use crate::models::{AdFormData, SelectedFile};
use crate::state::{UploadPhase, UploadSession};
use crate::workflow;

type Observer = Box<dyn Fn(&UploadPhase)>;

/// Sequences the upload workflow and owns its transient state.
pub struct Orchestrator<B> {
    backend: B,
    session: RefCell<UploadSession>,
    observer: Option<Observer>,
}

impl<B: Backend> Orchestrator<B> {
    /// Share-link flow: credentials then PUT.
    pub fn new(backend: B) -> Self {
        Self::with_session(backend, UploadSession::new())
    }

    /// Ad-campaign flow: credentials, PUT, then the ad form POST.
    pub fn with_ad_form(backend: B, form: AdFormData) -> Self {
        Self::with_session(backend, UploadSession::with_form(form))
    }

    pub fn with_session(backend: B, session: UploadSession) -> Self {
        Self {
            backend,
            session: RefCell::new(session),
            observer: None,
        }
    }

    /// Called after every phase change.
    pub fn with_observer(mut self, observer: impl Fn(&UploadPhase) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Read-only view of the session. Do not hold across an `.await`.
    pub fn session(&self) -> Ref<'_, UploadSession> {
        self.session.borrow()
    }

    pub fn phase(&self) -> UploadPhase {
        self.session.borrow().phase().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.session.borrow().phase().is_loading()
    }

    pub fn link(&self) -> Option<String> {
        self.session.borrow().phase().link().map(String::from)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.session.borrow().phase().error_message()
    }

    pub fn button_label(&self) -> &'static str {
        self.session.borrow().phase().button_label()
    }

    pub fn can_trigger(&self) -> bool {
        self.session.borrow().can_trigger()
    }

    pub fn select_file(&self, file: SelectedFile) {
        log::debug!("📎 Selected {:?}", file);
        self.session.borrow_mut().select_file(file);
    }

    pub fn clear_selection(&self) {
        self.session.borrow_mut().clear_selection();
    }

    /// See [`UploadSession::start_pick`].
    pub fn start_pick(&self) -> u64 {
        self.session.borrow_mut().start_pick()
    }

    /// See [`UploadSession::complete_pick`].
    pub fn complete_pick(&self, ticket: u64, file: SelectedFile) -> bool {
        log::debug!("📎 Picked {:?}", file);
        let landed = self.session.borrow_mut().complete_pick(ticket, file);
        if !landed {
            log::debug!("⏭️  Dropping stale pick #{}", ticket);
        }
        landed
    }

    /// Edit the ad form in place. No-op in the share-link flow.
    pub fn update_form(&self, edit: impl FnOnce(&mut AdFormData)) {
        if let Some(form) = self.session.borrow_mut().form_mut() {
            edit(form);
        }
    }

    pub fn set_form(&self, form: Option<AdFormData>) {
        self.session.borrow_mut().set_form(form);
    }

    pub fn take_form(&self) -> Option<AdFormData> {
        self.session.borrow_mut().take_form()
    }

    pub fn form(&self) -> Option<AdFormData> {
        self.session.borrow().form().cloned()
    }

    /// Run one upload attempt to completion.
    ///
    /// Returns the settled phase, or a [`TriggerError`] when the trigger
    /// was a no-op (nothing selected, or an attempt already in flight).
    /// Step failures are not errors here: they land in
    /// [`UploadPhase::Failed`] and are logged with full detail.
    pub async fn upload(&self) -> Result<UploadPhase, TriggerError> {
        let job = self.session.borrow_mut().begin().map_err(|e| {
            log::debug!("⏭️  Upload trigger ignored: {}", e);
            e
        })?;
        let guard = LoadingGuard { owner: self };
        self.notify();

        let outcome = workflow::run(&self.backend, job).await;
        if let Err(ref err) = outcome {
            log::error!("❌ Upload failed at {} step: {}", err.step().as_str(), err);
        }

        self.session.borrow_mut().finish(outcome);
        drop(guard);
        self.notify();
        Ok(self.phase())
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let phase = self.phase();
            observer(&phase);
        }
    }
}

/// Clears `Loading` if the attempt's future is dropped before settling.
struct LoadingGuard<'a, B: Backend> {
    owner: &'a Orchestrator<B>,
}

impl<B: Backend> Drop for LoadingGuard<'_, B> {
    fn drop(&mut self) {
        let aborted = match self.owner.session.try_borrow_mut() {
            Ok(mut session) => session.abort(),
            Err(_) => false,
        };
        if aborted {
            log::warn!("⚠️  Upload abandoned before completion");
            self.owner.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, TransportResult, UploadError, UploadStep};
    use crate::models::{AdSubmission, UploadCredentials};
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Credentials(String),
        Put { url: String, content_type: String, len: usize },
        Submit(AdSubmission),
    }

    /// In-memory backend recording every call.
    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<Call>>,
        fail_credentials: bool,
        fail_put: bool,
        fail_submit: bool,
        /// Suspends every call for this long before answering.
        delay: Option<Duration>,
    }

    impl MockBackend {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        async fn pause(&self) {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
        }
    }

    impl Backend for MockBackend {
        async fn fetch_credentials(&self, filename: &str) -> TransportResult<UploadCredentials> {
            self.calls.borrow_mut().push(Call::Credentials(filename.to_string()));
            self.pause().await;
            if self.fail_credentials {
                return Err(TransportError::Request("connection refused".into()));
            }
            Ok(UploadCredentials {
                upload_url: "https://s3/u".into(),
                download_url: "https://cdn/d".into(),
            })
        }

        async fn put_object(&self, upload_url: &str, file: &SelectedFile) -> TransportResult<()> {
            self.calls.borrow_mut().push(Call::Put {
                url: upload_url.to_string(),
                content_type: file.content_type().to_string(),
                len: file.len(),
            });
            self.pause().await;
            if self.fail_put {
                return Err(TransportError::Status { status: 403, body: "Request has expired".into() });
            }
            Ok(())
        }

        async fn submit_ad_form(&self, submission: &AdSubmission) -> TransportResult<()> {
            self.calls.borrow_mut().push(Call::Submit(submission.clone()));
            self.pause().await;
            if self.fail_submit {
                return Err(TransportError::Status { status: 500, body: "db down".into() });
            }
            Ok(())
        }
    }

    fn set_als() -> SelectedFile {
        SelectedFile::new("set.als", Some("application/octet-stream".into()), vec![7; 64])
    }

    fn recorded_phases<B: Backend>(orchestrator: Orchestrator<B>) -> (Orchestrator<B>, Rc<RefCell<Vec<UploadPhase>>>) {
        let phases = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&phases);
        let orchestrator = orchestrator.with_observer(move |phase| sink.borrow_mut().push(phase.clone()));
        (orchestrator, phases)
    }

    #[tokio::test]
    async fn test_no_file_is_noop() {
        let backend = MockBackend::default();
        let (orchestrator, phases) = recorded_phases(Orchestrator::new(&backend));

        assert_eq!(orchestrator.upload().await, Err(TriggerError::NoFileSelected));
        assert_eq!(orchestrator.phase(), UploadPhase::Idle);
        assert!(phases.borrow().is_empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_share_link() {
        let backend = MockBackend::default();
        let (orchestrator, phases) = recorded_phases(Orchestrator::new(&backend));
        orchestrator.select_file(set_als());

        let phase = orchestrator.upload().await.unwrap();

        assert_eq!(phase, UploadPhase::Succeeded("https://cdn/d".into()));
        assert_eq!(orchestrator.link().as_deref(), Some("https://cdn/d"));
        assert_eq!(orchestrator.error_message(), None);
        assert!(!orchestrator.is_loading());
        assert_eq!(
            backend.calls(),
            vec![
                Call::Credentials("set.als".into()),
                Call::Put {
                    url: "https://s3/u".into(),
                    content_type: "application/octet-stream".into(),
                    len: 64,
                },
            ]
        );
        assert_eq!(
            *phases.borrow(),
            vec![UploadPhase::Loading, UploadPhase::Succeeded("https://cdn/d".into())]
        );
    }

    #[tokio::test]
    async fn test_credential_failure_skips_put_and_post() {
        let backend = MockBackend { fail_credentials: true, ..Default::default() };
        let (orchestrator, phases) =
            recorded_phases(Orchestrator::with_ad_form(&backend, AdFormData::default()));
        orchestrator.select_file(set_als());

        let phase = orchestrator.upload().await.unwrap();

        assert_eq!(phase.error().map(UploadError::step), Some(UploadStep::Credentials));
        assert_eq!(orchestrator.error_message(), Some("Upload failed. Please try again."));
        assert_eq!(orchestrator.link(), None);
        assert_eq!(backend.calls(), vec![Call::Credentials("set.als".into())]);
        assert_eq!(phases.borrow().len(), 2);
        assert!(!orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_transfer_failure_skips_post() {
        let backend = MockBackend { fail_put: true, ..Default::default() };
        let orchestrator = Orchestrator::with_ad_form(&backend, AdFormData::default());
        orchestrator.select_file(set_als());

        let phase = orchestrator.upload().await.unwrap();

        assert_eq!(phase.error().map(UploadError::step), Some(UploadStep::Transfer));
        assert_eq!(orchestrator.link(), None);
        assert!(!backend.calls().iter().any(|c| matches!(c, Call::Submit(_))));
        assert!(!orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_ad_flow_submits_creative_url() {
        let backend = MockBackend::default();
        let form = AdFormData {
            event_name: "Warehouse Night".into(),
            ..Default::default()
        };
        let orchestrator = Orchestrator::with_ad_form(&backend, form);
        orchestrator.update_form(|f| f.budget = Some(120.0));
        orchestrator.select_file(set_als());

        orchestrator.upload().await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        match &calls[2] {
            Call::Submit(submission) => {
                assert_eq!(submission.creative_url, "https://cdn/d");
                assert_eq!(submission.form.event_name, "Warehouse Night");
                assert_eq!(submission.form.budget, Some(120.0));
            }
            other => panic!("expected submission, got {:?}", other),
        }
        assert_eq!(orchestrator.link().as_deref(), Some("https://cdn/d"));
    }

    #[tokio::test]
    async fn test_submission_failure_hides_valid_link() {
        let backend = MockBackend { fail_submit: true, ..Default::default() };
        let orchestrator = Orchestrator::with_ad_form(&backend, AdFormData::default());
        orchestrator.select_file(set_als());

        let phase = orchestrator.upload().await.unwrap();

        assert_eq!(phase.error().map(UploadError::step), Some(UploadStep::Submission));
        assert_eq!(orchestrator.link(), None);
        assert_eq!(backend.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let backend = MockBackend { fail_put: true, ..Default::default() };
        let orchestrator = Orchestrator::new(&backend);
        orchestrator.select_file(set_als());
        orchestrator.upload().await.unwrap();
        assert!(orchestrator.error_message().is_some());

        let healthy = MockBackend::default();
        let orchestrator = Orchestrator::with_session(&healthy, orchestrator.session().clone());
        orchestrator.upload().await.unwrap();
        assert_eq!(orchestrator.error_message(), None);
        assert_eq!(orchestrator.link().as_deref(), Some("https://cdn/d"));
    }

    #[tokio::test]
    async fn test_new_selection_clears_link_on_next_trigger() {
        let backend = MockBackend::default();
        let (orchestrator, phases) = recorded_phases(Orchestrator::new(&backend));
        orchestrator.select_file(set_als());
        orchestrator.upload().await.unwrap();

        orchestrator.select_file(SelectedFile::new("other.als", None, vec![1]));
        assert_eq!(orchestrator.link().as_deref(), Some("https://cdn/d"));

        orchestrator.upload().await.unwrap();
        // Second attempt passed through Loading with no link shown
        assert_eq!(phases.borrow()[2], UploadPhase::Loading);
        assert_eq!(backend.calls()[2], Call::Credentials("other.als".into()));
    }

    #[tokio::test]
    async fn test_reentrant_trigger_is_rejected() {
        let backend = MockBackend::default();
        let orchestrator = Orchestrator::new(&backend);
        orchestrator.select_file(set_als());
        orchestrator.session.borrow_mut().begin().unwrap();

        assert_eq!(orchestrator.upload().await, Err(TriggerError::AlreadyInFlight));
        assert!(backend.calls().is_empty());
        assert!(orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_concurrent_triggers_run_one_attempt() {
        let backend = MockBackend {
            delay: Some(Duration::from_millis(1)),
            ..Default::default()
        };
        let orchestrator = Orchestrator::new(&backend);
        orchestrator.select_file(set_als());

        let (first, second) = tokio::join!(orchestrator.upload(), orchestrator.upload());

        assert_eq!(first, Ok(UploadPhase::Succeeded("https://cdn/d".into())));
        assert_eq!(second, Err(TriggerError::AlreadyInFlight));
        let credential_calls = backend
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::Credentials(_)))
            .count();
        assert_eq!(credential_calls, 1);
        assert!(!orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_upload_returns_to_idle() {
        let backend = MockBackend {
            delay: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let (orchestrator, phases) = recorded_phases(Orchestrator::new(&backend));
        orchestrator.select_file(set_als());

        let timed_out = tokio::time::timeout(Duration::from_millis(5), orchestrator.upload())
            .await
            .is_err();

        assert!(timed_out);
        assert_eq!(orchestrator.phase(), UploadPhase::Idle);
        assert_eq!(*phases.borrow(), vec![UploadPhase::Loading, UploadPhase::Idle]);
        assert!(orchestrator.can_trigger());
    }

    #[test]
    fn test_guard_aborts_unsettled_attempt() {
        let backend = MockBackend::default();
        let (orchestrator, phases) = recorded_phases(Orchestrator::new(&backend));
        orchestrator.select_file(set_als());
        orchestrator.session.borrow_mut().begin().unwrap();

        drop(LoadingGuard { owner: &orchestrator });

        assert_eq!(orchestrator.phase(), UploadPhase::Idle);
        assert_eq!(*phases.borrow(), vec![UploadPhase::Idle]);
    }

    #[test]
    fn test_update_form_without_form_is_noop() {
        let orchestrator = Orchestrator::new(MockBackend::default());
        orchestrator.update_form(|f| f.event_name = "ignored".into());
        assert_eq!(orchestrator.form(), None);
    }

    #[tokio::test]
    async fn test_trigger_during_pick_sends_nothing() {
        let backend = MockBackend::default();
        let orchestrator = Orchestrator::new(&backend);
        orchestrator.select_file(set_als());

        let first = orchestrator.start_pick();
        assert_eq!(orchestrator.upload().await, Err(TriggerError::NoFileSelected));
        assert!(backend.calls().is_empty());

        let second = orchestrator.start_pick();
        assert!(orchestrator.complete_pick(second, SelectedFile::new("b.als", None, vec![2])));
        assert!(!orchestrator.complete_pick(first, SelectedFile::new("a.als", None, vec![1])));

        orchestrator.upload().await.unwrap();
        assert_eq!(backend.calls()[0], Call::Credentials("b.als".into()));
    }

    #[test]
    fn test_take_form_switches_to_share_link_flow() {
        let orchestrator = Orchestrator::with_ad_form(MockBackend::default(), AdFormData::default());
        orchestrator.update_form(|f| f.location = "Berlin".into());

        let form = orchestrator.take_form();
        assert_eq!(form.map(|f| f.location), Some("Berlin".to_string()));
        assert_eq!(orchestrator.form(), None);

        orchestrator.set_form(Some(AdFormData::default()));
        assert_eq!(orchestrator.form(), Some(AdFormData::default()));
        assert_eq!(orchestrator.phase(), UploadPhase::Idle);
    }
}
