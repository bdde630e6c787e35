// File: src/submission.rs
// Purpose: Submission modal: validation gate, async submit, success and auto-close

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use innkeep_validation::ValidationErrors;
use uuid::Uuid;

use crate::config::SubmissionConfig;
use crate::error::SubmitError;
use crate::form_state::FormState;
use crate::forms::FormKind;
use crate::notify::{Notice, Notifier};

/// Where the modal is in its lifecycle
///
/// `Form -> Submitting -> Success -> Closed`; a failed submit goes back to
/// `Form`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Form,
    Submitting,
    Success,
    Closed,
}

impl SubmissionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionPhase::Form => "form",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Success => "success",
            SubmissionPhase::Closed => "closed",
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Waits between submission steps
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real timer backed by tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// Persists validated form data
#[async_trait]
pub trait Submitter<T: Sync>: Send + Sync {
    async fn submit(&self, data: &T) -> Result<(), SubmitError>;
}

/// How a call to [`SubmissionModal::submit`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<F> {
    /// Validation blocked the submission; the modal stays on the form
    Invalid(ValidationErrors<F>),
    /// The submitter failed; the modal is back on the form
    Failed(SubmitError),
    /// Saved, confirmed and closed
    Completed { submission_id: Uuid },
}

impl<F> SubmitOutcome<F> {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }
}

/// A form shown in a modal dialog
pub struct SubmissionModal<T: FormKind> {
    state: FormState<T>,
    phase: SubmissionPhase,
    submit_delay: Duration,
    close_delay: Duration,
}

impl<T> SubmissionModal<T>
where
    T: FormKind + Clone + Send + Sync,
{
    pub fn new(data: T, config: &SubmissionConfig) -> Self {
        Self {
            state: FormState::new(data),
            phase: SubmissionPhase::Form,
            submit_delay: config.submit_delay(),
            close_delay: config.close_delay(),
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != SubmissionPhase::Closed
    }

    pub fn state(&self) -> &FormState<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState<T> {
        &mut self.state
    }

    /// Show the form again after the modal closed
    pub fn reopen(&mut self) {
        self.state.reset();
        self.phase = SubmissionPhase::Form;
    }

    /// Dismiss without submitting
    pub fn close(&mut self) {
        self.phase = SubmissionPhase::Closed;
    }

    /// Validate, submit, confirm and close
    ///
    /// The submitter is only called when validation passes. On success the
    /// form is reset and the modal closes after the configured delay.
    pub async fn submit<S, D, N>(
        &mut self,
        submitter: &S,
        delay: &D,
        notifier: &N,
    ) -> SubmitOutcome<T::Field>
    where
        S: Submitter<T> + ?Sized,
        D: Delay + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.phase != SubmissionPhase::Form {
            return SubmitOutcome::Failed(SubmitError::NotOpen(self.phase.as_str()));
        }

        let data = match self.state.submit() {
            Ok(data) => data.clone(),
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(form = T::KIND, %submission_id, "submitting");
        self.phase = SubmissionPhase::Submitting;
        delay.wait(self.submit_delay).await;

        if let Err(e) = submitter.submit(&data).await {
            tracing::warn!(form = T::KIND, %submission_id, error = %e, "submission failed");
            self.phase = SubmissionPhase::Form;
            notifier.notify(Notice::Error(format!("Failed to save {}: {}", T::LABEL.to_lowercase(), e)));
            return SubmitOutcome::Failed(e);
        }

        self.phase = SubmissionPhase::Success;
        tracing::info!(form = T::KIND, %submission_id, "submission succeeded");
        notifier.notify(Notice::Success(format!("{} saved successfully", T::LABEL)));

        delay.wait(self.close_delay).await;
        self.state.reset();
        self.phase = SubmissionPhase::Closed;

        SubmitOutcome::Completed { submission_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{LoginField, LoginForm};
    use crate::notify::NoticeLog;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        received: Mutex<Vec<LoginForm>>,
    }

    #[async_trait]
    impl Submitter<LoginForm> for Recorder {
        async fn submit(&self, data: &LoginForm) -> Result<(), SubmitError> {
            self.received.lock().unwrap().push(data.clone());
            Ok(())
        }
    }

    struct Refuse;

    #[async_trait]
    impl Submitter<LoginForm> for Refuse {
        async fn submit(&self, _data: &LoginForm) -> Result<(), SubmitError> {
            Err(SubmitError::Unavailable("timeout".into()))
        }
    }

    fn filled() -> LoginForm {
        LoginForm {
            email: "desk@grandinn.in".into(),
            password: "frontdesk".into(),
            remember_me: false,
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_submitter() {
        let mut modal = SubmissionModal::new(LoginForm::default(), &SubmissionConfig::default());
        let submitter = Recorder::default();
        let notices = NoticeLog::new();

        let outcome = modal.submit(&submitter, &NoDelay, &notices).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert!(errors.has_error(LoginField::Email)),
            other => panic!("expected invalid, got {:?}", other),
        }
        assert_eq!(modal.phase(), SubmissionPhase::Form);
        assert!(submitter.received.lock().unwrap().is_empty());
        assert!(notices.notices().is_empty());
        assert!(modal.state().visible_error(LoginField::Email).is_some());
    }

    #[tokio::test]
    async fn test_successful_submission_closes() {
        let mut modal = SubmissionModal::new(filled(), &SubmissionConfig::default());
        let submitter = Recorder::default();
        let notices = NoticeLog::new();

        let outcome = modal.submit(&submitter, &NoDelay, &notices).await;

        assert!(outcome.is_completed());
        assert_eq!(modal.phase(), SubmissionPhase::Closed);
        assert!(!modal.is_open());
        assert_eq!(submitter.received.lock().unwrap().as_slice(), &[filled()]);
        assert_eq!(notices.last(), Some(Notice::Success("Login saved successfully".into())));
    }

    #[tokio::test]
    async fn test_failed_submission_returns_to_form() {
        let mut modal = SubmissionModal::new(filled(), &SubmissionConfig::default());
        let notices = NoticeLog::new();

        let outcome = modal.submit(&Refuse, &NoDelay, &notices).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Unavailable("timeout".into()))
        );
        assert_eq!(modal.phase(), SubmissionPhase::Form);
        assert_eq!(modal.state().data(), &filled());
        assert!(notices.last().is_some_and(|n| n.is_error()));
    }

    #[tokio::test]
    async fn test_closed_modal_rejects_submit() {
        let mut modal = SubmissionModal::new(filled(), &SubmissionConfig::default());
        modal.close();

        let outcome = modal.submit(&Recorder::default(), &NoDelay, &NoticeLog::new()).await;
        assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::NotOpen("closed")));

        modal.reopen();
        assert_eq!(modal.phase(), SubmissionPhase::Form);
    }

    #[tokio::test]
    async fn test_tokio_delay_waits() {
        let start = tokio::time::Instant::now();
        TokioDelay.wait(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
