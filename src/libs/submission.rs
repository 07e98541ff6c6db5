//! Record submission flow.
//!
//! [`SubmissionFlow`] owns the record being edited. Each mutation goes
//! through [`SubmissionFlow::set_field`], which recomputes the derived
//! duration and revalidates. [`SubmissionFlow::submit`] hands a valid record
//! to the [`RecordStore`] and moves between three states:
//!
//! ```text
//!            set_field
//!   ┌─────────┐ ◀──────── ┌─────────┐
//!   │ Editing │           │  Reset  │
//!   └─────────┘           └─────────┘
//!     │    ▲                   ▲
//!  ok │    │ failure           │ acknowledged
//!     ▼    │                   │
//!   ┌────────────┐─────────────┘
//!   │ Submitting │
//!   └────────────┘
//! ```
//!
//! A record with validation errors never leaves `Editing`; the outcome names
//! the first invalid field so the caller can move focus there.

use super::duration::compute_duration;
use super::record::{ChargingRecord, Field};
use super::validator::{ValidationErrors, Validator};
use crate::api::{ApiError, RecordStore};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(2500);

pub const SUBMIT_SUCCESS: &str = "Submitted successfully";
pub const SUBMIT_FAILED: &str = "Submission failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Transient message shown after a submission attempt.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Notification {
    fn new(kind: NotificationKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked { focus: Field, errors: ValidationErrors },
    /// The store acknowledged the record and the form was cleared.
    Submitted,
    /// The store rejected the record; the entered values are kept.
    Failed { message: String },
    /// The session is missing or was rejected; the entered values are kept.
    SessionInvalid,
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field '{0}' is computed and cannot be edited")]
    ReadOnly(Field),
}

pub struct SubmissionFlow<S: RecordStore> {
    store: S,
    validator: Validator,
    record: ChargingRecord,
    errors: ValidationErrors,
    state: FlowState,
    notification: Option<Notification>,
    notification_ttl: Duration,
}

impl<S: RecordStore> SubmissionFlow<S> {
    pub fn new(store: S) -> Self {
        Self::with_validator(store, Validator::default())
    }

    pub fn with_validator(store: S, validator: Validator) -> Self {
        let record = ChargingRecord::default();
        let errors = validator.validate(&record);
        Self {
            store,
            validator,
            record,
            errors,
            state: FlowState::Editing,
            notification: None,
            notification_ttl: NOTIFICATION_TTL,
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn record(&self) -> &ChargingRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current notification, if it has not yet been dismissed.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired_at(Instant::now()))
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Updates one field, then recomputes the duration and revalidates.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if field.is_derived() {
            return Err(FormError::ReadOnly(field));
        }
        self.record.set(field, value);
        if matches!(field, Field::ChargeTimeInitial | Field::ChargeTimeFinal) {
            self.refresh_duration();
        }
        self.errors = self.validator.validate(&self.record);
        if self.state == FlowState::Reset {
            self.state = FlowState::Editing;
        }
        Ok(())
    }

    /// Replaces every editable field with the values of `record`.
    pub fn load(&mut self, record: &ChargingRecord) {
        for field in Field::ALL.into_iter().filter(|f| !f.is_derived()) {
            self.record.set(field, record.get(field));
        }
        self.refresh_duration();
        self.errors = self.validator.validate(&self.record);
        self.state = FlowState::Editing;
    }

    fn refresh_duration(&mut self) {
        let duration = compute_duration(&self.record.charge_time_initial, &self.record.charge_time_final);
        self.record.set(Field::Duration, duration);
    }

    /// Whether the submit action is currently enabled. Evaluated against the
    /// record itself, so a freshly reset form is not submittable even though
    /// its error map was cleared.
    pub fn can_submit(&self) -> bool {
        self.state != FlowState::Submitting && self.validator.is_valid(&self.record)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state == FlowState::Submitting {
            return SubmitOutcome::Busy;
        }

        self.errors = self.validator.validate(&self.record);
        if let Some(focus) = self.errors.first() {
            debug!(%focus, errors = self.errors.len(), "submit blocked by validation");
            self.state = FlowState::Editing;
            return SubmitOutcome::Blocked {
                focus,
                errors: self.errors.clone(),
            };
        }

        self.refresh_duration();
        self.state = FlowState::Submitting;
        let result = self.store.create_record(&self.record).await;

        match result {
            Ok(()) => {
                self.record = ChargingRecord::default();
                self.errors = ValidationErrors::default();
                self.state = FlowState::Reset;
                self.notify(NotificationKind::Success, SUBMIT_SUCCESS);
                SubmitOutcome::Submitted
            }
            Err(ApiError::SessionInvalid) => {
                warn!("submission rejected: session invalid");
                self.state = FlowState::Editing;
                SubmitOutcome::SessionInvalid
            }
            Err(e) => {
                warn!(error = %e, "submission failed");
                let message = e.server_message().unwrap_or(SUBMIT_FAILED).to_string();
                self.state = FlowState::Editing;
                self.notify(NotificationKind::Failure, message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.notification = Some(Notification::new(kind, text, self.notification_ttl));
    }
}
