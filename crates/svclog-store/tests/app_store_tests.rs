//! AppStore Tests
//!
//! Form and table controllers driving a persistent store end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::clock;
use svclog_core::logging_facility::init_test_capture;
use svclog_core::svclog_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ACTION, FIELD_DRAFTS_LEN, FIELD_ERR_CODE,
    FIELD_ERR_MESSAGE, FIELD_LOGS_LEN, FIELD_STORAGE_KEY,
};
use svclog_core::{
    Dispatcher, EditOutcome, FieldEdit, FormController, SaveStatus, ServiceType, Settings,
    SubmitOutcome, TableController,
};
use svclog_store::repo::read_state;
use svclog_store::{AppStore, FileStorage, MemoryStorage};
use tempfile::TempDir;

fn fill(form: &mut FormController<svclog_core::ManualClock>, car_id: &str) {
    let fields = common::valid_fields(car_id);
    form.edit(FieldEdit::ProviderId(fields.provider_id));
    form.edit(FieldEdit::ServiceOrder(fields.service_order));
    form.edit(FieldEdit::CarId(fields.car_id));
    form.edit(FieldEdit::Odometer(fields.odometer));
    form.edit(FieldEdit::EngineHours(fields.engine_hours));
    form.edit(FieldEdit::ServiceType(ServiceType::Unplanned));
    form.edit(FieldEdit::ServiceDescription(fields.service_description));
}

#[test]
fn test_autosaved_draft_resumes_after_reopen() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::default();
    let clock = clock();

    let draft_id = {
        let mut app = AppStore::open(FileStorage::new(dir.path()), &settings);
        let mut form = FormController::new(clock.clone(), &settings);
        form.edit(FieldEdit::CarId("CAR-77".to_string()));
        clock.advance_ms(500);
        form.tick(&mut app).unwrap();
        assert_eq!(form.save_status(), SaveStatus::Saved);
        form.draft().draft_id.clone()
    };

    let app = AppStore::open(FileStorage::new(dir.path()), &settings);
    let stored = app.state().latest_draft().cloned().unwrap();
    assert_eq!(stored.draft_id, draft_id);
    assert!(stored.is_saved);

    let mut form = FormController::new(clock, &settings);
    form.resume(stored);
    assert_eq!(form.fields().car_id, "CAR-77");
}

#[test]
fn test_submit_edit_delete_are_persisted() {
    let settings = Settings::default();
    let clock = clock();
    let mut app = AppStore::open(MemoryStorage::new(), &settings);
    let mut form = FormController::new(clock.clone(), &settings);
    let mut table = TableController::new(clock.clone(), &settings);

    fill(&mut form, "CAR-E2E");
    clock.advance_ms(500);
    form.tick(&mut app).unwrap();
    assert_eq!(read_state(app.storage(), app.key()).unwrap().unwrap().drafts().len(), 1);

    let SubmitOutcome::Committed(log) = form.submit(&mut app).unwrap() else {
        panic!("expected commit");
    };
    let persisted = read_state(app.storage(), app.key()).unwrap().unwrap();
    assert_eq!(persisted.logs().len(), 1);
    assert!(persisted.drafts().is_empty());

    table.begin_edit(app.state(), &log.id).unwrap();
    table.edit_field(FieldEdit::ServiceDescription("Coolant and filters".to_string()));
    let outcome = table.save_edit(&mut app).unwrap().unwrap();
    assert!(matches!(outcome, EditOutcome::Saved(_)));
    let persisted = read_state(app.storage(), app.key()).unwrap().unwrap();
    assert_eq!(
        persisted.get_log(&log.id).unwrap().service_description,
        "Coolant and filters"
    );

    table.request_delete(log.id.clone());
    table.confirm_delete(&mut app).unwrap();
    let persisted = read_state(app.storage(), app.key()).unwrap().unwrap();
    assert!(persisted.logs().is_empty());
    assert!(table.rows(app.state()).is_empty());
}

#[test]
fn test_persist_lifecycle_events() {
    let capture = init_test_capture();
    let settings = Settings::from_toml_str("storage_key = \"svclog:events\"").unwrap();
    let mut app = AppStore::open(MemoryStorage::new(), &settings);

    app.dispatch(svclog_core::Action::ClearDrafts).unwrap();

    let for_key = |op: &str, event: &str| {
        capture.count_events(|e| e.is(op, event) && e.field(FIELD_STORAGE_KEY) == Some("svclog:events"))
    };
    assert_eq!(for_key("hydrate", EVENT_START), 1);
    assert_eq!(for_key("persist", EVENT_START), 1);
    assert!(capture.count_events(|e| e.is("persist", EVENT_END)) >= 1);
    assert!(capture.events_for_op("hydrate").iter().any(|e| {
        e.is("hydrate", EVENT_END)
            && e.field(FIELD_LOGS_LEN).is_some()
            && e.field(FIELD_DRAFTS_LEN).is_some()
    }));
}

#[test]
fn test_failed_write_logs_end_error() {
    let capture = init_test_capture();
    let settings = Settings::from_toml_str("storage_key = \"svclog:failing\"").unwrap();
    let mut app = AppStore::open(common::FailingStorage::default(), &settings);

    app.dispatch(svclog_core::Action::ClearDrafts).unwrap();

    let errors = capture.count_events(|e| {
        e.is("persist", EVENT_END_ERROR)
            && e.field(FIELD_STORAGE_KEY) == Some("svclog:failing")
            && e.field(FIELD_ERR_CODE) == Some("ERR_PERSISTENCE")
            && e.field(FIELD_ERR_MESSAGE) == Some("quota exceeded")
    });
    assert_eq!(errors, 1);

    let warned = capture.count_events(|e| {
        e.level == tracing::Level::WARN
            && e.field(FIELD_ACTION) == Some("clearDrafts")
            && e.field(FIELD_STORAGE_KEY) == Some("svclog:failing")
    });
    assert_eq!(warned, 1);
}
