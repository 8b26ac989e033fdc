//! Reducer Tests
//!
//! ## Scenarios Covered
//!
//! 1. Add, update and remove logs through `apply`
//! 2. Failed actions leave the caller's snapshot untouched
//! 3. Earlier snapshots never observe later changes
//! 4. Draft upsert, remove and clear

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{sample_log, store_with, t0};
use svclog_core::{apply, Action, Dispatcher, Draft, DraftId, LogFields, LogId, Store, SvcLogError};

fn draft(id: &str, car: &str) -> Draft {
    let mut fields = LogFields::starting_on(common::date("2024-03-01"));
    fields.car_id = car.to_string();
    Draft::new(DraftId::from_string(id), fields)
}

#[test]
fn test_add_then_remove_restores_collection() {
    let existing = sample_log("CAR-1", "2024-01-01", Some(10.0));
    let before = store_with(vec![existing]);

    let added = sample_log("CAR-2", "2024-01-02", Some(20.0));
    let id = added.id.clone();
    let after_add = apply(before.clone(), Action::AddLog(added)).unwrap();
    assert_eq!(after_add.logs().len(), 2);

    let after_remove = apply(after_add, Action::RemoveLog { id }).unwrap();
    assert_eq!(after_remove, before);
}

#[test]
fn test_duplicate_add_fails_without_partial_mutation() {
    let log = sample_log("CAR-1", "2024-01-01", Some(10.0));
    let mut state = store_with(vec![log.clone()]);
    let snapshot = state.clone();

    let result = state.dispatch(Action::AddLog(log.clone()));

    assert!(matches!(
        result,
        Err(SvcLogError::LogAlreadyExists { ref log_id }) if *log_id == log.id.to_string()
    ));
    assert_eq!(state, snapshot);
}

#[test]
fn test_update_replaces_fields_keeps_identity_and_created_at() {
    let original = sample_log("CAR-1", "2024-01-01", Some(10.0));
    let state = store_with(vec![original.clone()]);

    let mut edited = original.clone();
    edited.car_id = "CAR-1B".to_string();
    edited.odometer = Some(99.0);
    edited.created_at = t0() + chrono::Duration::days(30);

    let next = apply(state, Action::UpdateLog(edited)).unwrap();
    let stored = next.get_log(&original.id).unwrap();

    assert_eq!(stored.car_id, "CAR-1B");
    assert_eq!(stored.odometer, Some(99.0));
    assert_eq!(stored.created_at, original.created_at);
    assert_eq!(next.logs().len(), 1);
}

#[test]
fn test_update_and_remove_of_missing_id_are_no_ops() {
    let state = store_with(vec![sample_log("CAR-1", "2024-01-01", Some(10.0))]);

    let ghost = sample_log("CAR-X", "2024-01-01", Some(1.0));
    let after_update = apply(state.clone(), Action::UpdateLog(ghost)).unwrap();
    assert_eq!(after_update, state);

    let after_remove = apply(
        state.clone(),
        Action::RemoveLog {
            id: LogId::from_string("missing"),
        },
    )
    .unwrap();
    assert_eq!(after_remove, state);
}

#[test]
fn test_earlier_snapshot_is_unaffected_by_later_actions() {
    let first = store_with(vec![sample_log("CAR-1", "2024-01-01", Some(10.0))]);
    let held = first.clone();

    let second = apply(first, Action::AddLog(sample_log("CAR-2", "2024-01-02", None))).unwrap();
    let third = apply(second, Action::UpsertDraft(draft("d1", "CAR-3"))).unwrap();

    assert_eq!(held.logs().len(), 1);
    assert!(held.drafts().is_empty());
    assert_eq!(third.logs().len(), 2);
    assert_eq!(third.drafts().len(), 1);
}

#[test]
fn test_upsert_replaces_in_place_by_draft_id() {
    let mut state = Store::new();
    state.dispatch(Action::UpsertDraft(draft("d1", "A"))).unwrap();
    state.dispatch(Action::UpsertDraft(draft("d2", "B"))).unwrap();
    state.dispatch(Action::UpsertDraft(draft("d1", "A2"))).unwrap();

    let cars: Vec<_> = state.drafts().iter().map(|d| d.fields.car_id.as_str()).collect();
    assert_eq!(cars, vec!["A2", "B"]);
    assert_eq!(state.latest_draft().unwrap().draft_id.as_str(), "d2");
}

#[test]
fn test_remove_and_clear_drafts() {
    let mut state = Store::new();
    state.dispatch(Action::UpsertDraft(draft("d1", "A"))).unwrap();
    state.dispatch(Action::UpsertDraft(draft("d2", "B"))).unwrap();

    state
        .dispatch(Action::RemoveDraft {
            draft_id: DraftId::from_string("d1"),
        })
        .unwrap();
    assert!(state.get_draft(&DraftId::from_string("d1")).is_none());
    assert_eq!(state.drafts().len(), 1);

    // Removing again is harmless
    state
        .dispatch(Action::RemoveDraft {
            draft_id: DraftId::from_string("d1"),
        })
        .unwrap();

    state.dispatch(Action::ClearDrafts).unwrap();
    assert!(state.drafts().is_empty());
}
