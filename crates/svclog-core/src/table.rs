//! Service log table: filtering, sorting, edit and delete
//!
//! The visible rows are a pure function of the current snapshot and the
//! `LogQuery`, recomputed on every read. Edit and delete go back through the
//! dispatcher.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};
use svclog_core_types::LogId;

use crate::commands::Action;
use crate::config::Settings;
use crate::errors::{Result, SvcLogError};
use crate::model::{FieldEdit, LogFields, ServiceLog, ServiceType};
use crate::notice::{self, Notice};
use crate::ops::{Dispatcher, Store};
use crate::rules::{validate, ValidationErrors};
use crate::timer::Clock;
use crate::{log_op_end, log_op_error, log_op_start};

/// Type filter: everything, or one service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ServiceType),
}

/// Which dates must fall inside the date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeField {
    #[default]
    StartDate,
    StartAndEndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    StartDate,
    Odometer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Search, filter and sort settings for the table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogQuery {
    pub search: String,
    pub type_filter: TypeFilter,
    /// Inclusive lower bound; `None` means unbounded
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound; `None` means unbounded
    pub to: Option<NaiveDate>,
    pub date_field: DateRangeField,
    pub sort: Option<SortSpec>,
}

impl LogQuery {
    /// Cycle the sort on `key`: unset, ascending, descending, unset
    ///
    /// Switching to a different key starts that key at ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(SortSpec {
                key: current,
                direction,
            }) if current == key => match direction {
                SortDirection::Ascending => Some(SortSpec {
                    key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec {
                key,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Whether one log passes the search, type and date filters
    pub fn matches(&self, log: &ServiceLog) -> bool {
        self.matches_search(log) && self.matches_type(log) && self.matches_dates(log)
    }

    fn matches_search(&self, log: &ServiceLog) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&log.provider_id, &log.service_order, &log.car_id]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_type(&self, log: &ServiceLog) -> bool {
        match self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => log.service_type == t,
        }
    }

    fn matches_dates(&self, log: &ServiceLog) -> bool {
        let in_range = |date: NaiveDate| {
            self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
        };
        match self.date_field {
            DateRangeField::StartDate => in_range(log.start_date),
            DateRangeField::StartAndEndDate => in_range(log.start_date) && in_range(log.end_date),
        }
    }

    /// Filter then (optionally) sort, preserving insertion order otherwise
    ///
    /// The sort is stable, so rows that compare equal keep their filtered
    /// order. Logs without an odometer reading sort before all others when
    /// ascending.
    pub fn apply<'a, I>(&self, logs: I) -> Vec<&'a ServiceLog>
    where
        I: IntoIterator<Item = &'a ServiceLog>,
    {
        let mut rows: Vec<&ServiceLog> = logs.into_iter().filter(|log| self.matches(log)).collect();

        if let Some(spec) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare_by(spec.key, a, b);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}

fn compare_by(key: SortKey, a: &ServiceLog, b: &ServiceLog) -> Ordering {
    match key {
        SortKey::StartDate => a.start_date.cmp(&b.start_date),
        SortKey::Odometer => match (a.odometer, b.odometer) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// An open edit dialog for one log
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub log_id: LogId,
    pub fields: LogFields,
    pub errors: ValidationErrors,
}

/// Result of saving an edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The log was updated and the dialog closed
    Saved(ServiceLog),
    /// Validation failed; the dialog stays open with `errors` set
    Rejected(ValidationErrors),
}

pub struct TableController<C: Clock> {
    clock: C,
    query: LogQuery,
    editing: Option<EditSession>,
    pending_delete: Option<LogId>,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<C: Clock> TableController<C> {
    pub fn new(clock: C, settings: &Settings) -> Self {
        Self {
            clock,
            query: LogQuery::default(),
            editing: None,
            pending_delete: None,
            notice: None,
            notice_ttl: settings.notice_ttl(),
        }
    }

    pub fn query(&self) -> &LogQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut LogQuery {
        &mut self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.query.type_filter = filter;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.query.from = from;
        self.query.to = to;
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.query.toggle_sort(key);
    }

    /// Rows to display for the given snapshot
    pub fn rows<'a>(&self, state: &'a Store) -> Vec<&'a ServiceLog> {
        self.query.apply(state.logs())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Expire the notice once its time is up
    pub fn tick(&mut self) {
        notice::expire(&mut self.notice, self.clock.now());
    }

    // ===== Edit =====

    /// Open the edit dialog pre-filled with the log's current values
    ///
    /// # Errors
    /// * `LogNotFound` - If the snapshot has no log with this id
    pub fn begin_edit(&mut self, state: &Store, id: &LogId) -> Result<&EditSession> {
        let log = state.get_log(id).ok_or_else(|| SvcLogError::LogNotFound {
            log_id: id.to_string(),
        })?;

        Ok(&*self.editing.insert(EditSession {
            log_id: log.id.clone(),
            fields: log.fields(),
            errors: ValidationErrors::new(),
        }))
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Apply an edit to the open dialog; returns false if none is open
    pub fn edit_field(&mut self, edit: FieldEdit) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.fields.apply_edit(edit);
                true
            }
            None => false,
        }
    }

    /// Validate the dialog and replace every editable field of the log
    ///
    /// Returns `Ok(None)` when no dialog is open.
    ///
    /// # Errors
    /// * `LogNotFound` - If the log was deleted while the dialog was open
    ///   (the dialog is closed)
    pub fn save_edit<D: Dispatcher + ?Sized>(
        &mut self,
        dispatcher: &mut D,
    ) -> Result<Option<EditOutcome>> {
        let Some(session) = self.editing.as_mut() else {
            return Ok(None);
        };

        log_op_start!("save_edit", log_id = %session.log_id);
        let start = std::time::Instant::now();

        let errors = validate(&session.fields);
        if !errors.is_valid() {
            session.errors = errors.clone();
            log_op_end!(
                "save_edit",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = "rejected"
            );
            return Ok(Some(EditOutcome::Rejected(errors)));
        }

        let result = Self::write_edit(session, dispatcher);
        match result {
            Ok(updated) => {
                self.editing = None;
                self.notice = Some(Notice::new(
                    "Service log updated!",
                    self.clock.now(),
                    self.notice_ttl,
                ));
                log_op_end!(
                    "save_edit",
                    duration_ms = start.elapsed().as_millis() as u64,
                    log_id = %updated.id
                );
                Ok(Some(EditOutcome::Saved(updated)))
            }
            Err(e) => {
                if matches!(e, SvcLogError::LogNotFound { .. }) {
                    self.editing = None;
                }
                log_op_error!(
                    "save_edit",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }

    fn write_edit<D: Dispatcher + ?Sized>(
        session: &EditSession,
        dispatcher: &mut D,
    ) -> Result<ServiceLog> {
        let current = dispatcher
            .state()
            .get_log(&session.log_id)
            .ok_or_else(|| SvcLogError::LogNotFound {
                log_id: session.log_id.to_string(),
            })?;
        let updated = current.with_fields(&session.fields)?;
        dispatcher.dispatch(Action::UpdateLog(updated.clone()))?;
        Ok(updated)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ===== Delete =====

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: LogId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&LogId> {
        self.pending_delete.as_ref()
    }

    /// Delete the log awaiting confirmation
    ///
    /// Returns the deleted id, or `None` when nothing was pending. Deleting
    /// an id that is already gone is a no-op in the store.
    ///
    /// # Errors
    /// Propagates a dispatch failure; the confirmation stays pending.
    pub fn confirm_delete<D: Dispatcher + ?Sized>(
        &mut self,
        dispatcher: &mut D,
    ) -> Result<Option<LogId>> {
        let Some(id) = self.pending_delete.clone() else {
            return Ok(None);
        };

        log_op_start!("confirm_delete", log_id = %id);
        let start = std::time::Instant::now();

        dispatcher
            .dispatch(Action::RemoveLog { id: id.clone() })
            .map_err(|e| {
                log_op_error!(
                    "confirm_delete",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        self.pending_delete = None;
        if self
            .editing
            .as_ref()
            .is_some_and(|session| session.log_id == id)
        {
            self.editing = None;
        }

        log_op_end!(
            "confirm_delete",
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(Some(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
