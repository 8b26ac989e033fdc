//! Service log entry form
//!
//! Owns the in-progress draft, feeds edits to the autosave controller and
//! promotes the draft into a committed log on a valid submit.
//!
//! ## Logging Ownership
//!
//! `submit` owns lifecycle logging (`log_op_start!` / `log_op_end!` /
//! `log_op_error!`). Everything below it uses `tracing::debug!` only.

use chrono::Duration;
use svclog_core_types::LogId;

use crate::autosave::{AutosaveController, AutosaveWrite, SaveStatus};
use crate::commands::Action;
use crate::config::Settings;
use crate::errors::Result;
use crate::model::{Draft, FieldEdit, LogFields, ServiceLog};
use crate::notice::{self, Notice};
use crate::ops::Dispatcher;
use crate::rules::{validate, ValidationErrors};
use crate::timer::Clock;
use crate::{log_op_end, log_op_error, log_op_start};

/// Where the form is in its edit/commit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing has been entered yet
    Empty,
    /// The draft holds user input
    Editing,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft was promoted; the form has been reset
    Committed(ServiceLog),
    /// Validation failed; the draft is kept as is
    Rejected(ValidationErrors),
}

pub struct FormController<C: Clock> {
    clock: C,
    draft: Draft,
    errors: ValidationErrors,
    autosave: AutosaveController,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<C: Clock> FormController<C> {
    /// New form holding a fresh draft dated today
    pub fn new(clock: C, settings: &Settings) -> Self {
        let draft = Draft::fresh(clock.today());
        Self {
            clock,
            draft,
            errors: ValidationErrors::new(),
            autosave: AutosaveController::new(settings.autosave_window()),
            notice: None,
            notice_ttl: settings.notice_ttl(),
        }
    }

    /// Continue an existing draft session
    ///
    /// The draft keeps its id, so further autosaves replace the stored entry
    /// instead of adding a second one.
    pub fn resume(&mut self, draft: Draft) {
        tracing::debug!(draft_id = %draft.draft_id, "form: resuming draft");
        self.autosave.reset();
        self.errors = ValidationErrors::new();
        self.draft = draft;
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn fields(&self) -> &LogFields {
        &self.draft.fields
    }

    /// Per-field messages from the last rejected submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        if self.draft.is_blank() {
            FormPhase::Empty
        } else {
            FormPhase::Editing
        }
    }

    pub fn save_status(&self) -> SaveStatus {
        self.autosave.status()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Apply one field edit and restart the autosave quiet period
    pub fn edit(&mut self, edit: FieldEdit) {
        self.draft.fields.apply_edit(edit);
        self.draft.is_saved = false;
        self.autosave.notify_change(&self.draft, self.clock.now());
    }

    /// Run time-driven work: a due autosave and notice expiry
    ///
    /// # Errors
    /// Propagates a dispatch failure from the autosave.
    pub fn tick<D: Dispatcher + ?Sized>(&mut self, dispatcher: &mut D) -> Result<()> {
        let now = self.clock.now();
        match self.autosave.poll(now, dispatcher)? {
            Some(AutosaveWrite::Saved(saved)) => {
                self.draft.last_saved = saved.last_saved;
                self.draft.is_saved = true;
            }
            Some(AutosaveWrite::Removed(_)) => {
                self.draft.last_saved = None;
                self.draft.is_saved = false;
            }
            None => {}
        }
        notice::expire(&mut self.notice, now);
        Ok(())
    }

    /// Validate and, if valid, commit the draft as a new service log
    ///
    /// On success the log is added, the draft is removed from the draft store,
    /// any pending autosave is cancelled and the form starts over with a new
    /// draft id. On validation failure nothing changes except `errors()`.
    ///
    /// # Errors
    /// Propagates dispatch failures (e.g. `LogAlreadyExists`).
    pub fn submit<D: Dispatcher + ?Sized>(&mut self, dispatcher: &mut D) -> Result<SubmitOutcome> {
        log_op_start!("submit_log", draft_id = %self.draft.draft_id);
        let start = std::time::Instant::now();

        let errors = validate(&self.draft.fields);
        if !errors.is_valid() {
            tracing::debug!(errors = %errors, "form: submit rejected");
            self.errors = errors.clone();
            log_op_end!(
                "submit_log",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = "rejected"
            );
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let log = self.commit(dispatcher).map_err(|e| {
            log_op_error!(
                "submit_log",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "submit_log",
            duration_ms = start.elapsed().as_millis() as u64,
            log_id = %log.id
        );
        Ok(SubmitOutcome::Committed(log))
    }

    fn commit<D: Dispatcher + ?Sized>(&mut self, dispatcher: &mut D) -> Result<ServiceLog> {
        let now = self.clock.now();
        let log = ServiceLog::from_fields(LogId::new(), &self.draft.fields, now)?;

        dispatcher.dispatch(Action::AddLog(log.clone()))?;
        dispatcher.dispatch(Action::RemoveDraft {
            draft_id: self.draft.draft_id.clone(),
        })?;

        self.autosave.reset();
        self.errors = ValidationErrors::new();
        self.draft = Draft::fresh(self.clock.today());
        self.notice = Some(Notice::new(
            format!("Log for car {} created", log.car_id),
            now,
            self.notice_ttl,
        ));
        Ok(log)
    }

    /// Tear the form down, cancelling any pending autosave
    pub fn teardown(&mut self) {
        if self.autosave.cancel() {
            tracing::debug!(draft_id = %self.draft.draft_id, "form: pending autosave cancelled on teardown");
        }
    }
}
