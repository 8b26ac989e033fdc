use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use svclog_core::{
    Action, Dispatcher, LogFields, LogId, ManualClock, ServiceLog, ServiceType, Settings, Store,
};

/// Fixed starting instant for every test clock: 2024-03-01T09:00:00Z
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn clock() -> ManualClock {
    ManualClock::new(t0())
}

#[allow(dead_code)]
pub fn settings() -> Settings {
    Settings::default()
}

#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A field set that passes validation
#[allow(dead_code)]
pub fn valid_fields(car_id: &str) -> LogFields {
    LogFields {
        provider_id: "PRV-1".to_string(),
        service_order: "SO-100".to_string(),
        car_id: car_id.to_string(),
        odometer: Some(1200.0),
        engine_hours: Some(40.0),
        start_date: Some(date("2024-03-01")),
        end_date: Some(date("2024-03-02")),
        service_type: ServiceType::Planned,
        service_description: "Oil change".to_string(),
    }
}

/// A committed log with the given car, start date and odometer
#[allow(dead_code)]
pub fn sample_log(car_id: &str, start: &str, odometer: Option<f64>) -> ServiceLog {
    let mut fields = valid_fields(car_id);
    fields.start_date = Some(date(start));
    fields.end_date = Some(date(start));
    fields.odometer = odometer;
    ServiceLog::from_fields(LogId::new(), &fields, t0()).unwrap()
}

/// Store holding `logs` in the given order
#[allow(dead_code)]
pub fn store_with(logs: Vec<ServiceLog>) -> Store {
    let mut store = Store::new();
    for log in logs {
        store.dispatch(Action::AddLog(log)).unwrap();
    }
    store
}
