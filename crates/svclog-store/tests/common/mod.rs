use chrono::{DateTime, TimeZone, Utc};
use svclog_core::errors::{ExError, ExErrorKind};
use svclog_core::{LogFields, ManualClock, ServiceType};
use svclog_store::KvStorage;

#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn clock() -> ManualClock {
    ManualClock::new(t0())
}

#[allow(dead_code)]
pub fn valid_fields(car_id: &str) -> LogFields {
    LogFields {
        provider_id: "PRV-1".to_string(),
        service_order: "SO-100".to_string(),
        car_id: car_id.to_string(),
        odometer: Some(1200.0),
        engine_hours: Some(40.0),
        start_date: Some("2024-03-01".parse().unwrap()),
        end_date: Some("2024-03-02".parse().unwrap()),
        service_type: ServiceType::Unplanned,
        service_description: "Coolant flush".to_string(),
    }
}

/// Storage whose reads work but every write is refused
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingStorage {
    pub write_attempts: usize,
}

impl KvStorage for FailingStorage {
    fn get(&self, _key: &str) -> svclog_store::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> svclog_store::Result<()> {
        self.write_attempts += 1;
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("storage_set")
            .with_entity_id(key)
            .with_message("quota exceeded"))
    }

    fn remove(&mut self, _key: &str) -> svclog_store::Result<bool> {
        Ok(false)
    }
}
