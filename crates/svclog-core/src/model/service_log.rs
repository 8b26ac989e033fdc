use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use svclog_core_types::LogId;

use super::fields::LogFields;
use super::service_type::ServiceType;
use crate::errors::{Result, SvcLogError};

/// A committed maintenance record for one vehicle
///
/// `id` and `created_at` are assigned once when the draft is promoted and never
/// change afterwards; every other field may be replaced by an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLog {
    pub id: LogId,
    pub provider_id: String,
    pub service_order: String,
    pub car_id: String,
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub service_description: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceLog {
    /// Build a log from form fields
    ///
    /// # Errors
    /// `MissingDate` if either calendar date is unset. Callers validate first,
    /// so this only fires when validation was skipped.
    pub fn from_fields(id: LogId, fields: &LogFields, created_at: DateTime<Utc>) -> Result<Self> {
        let start_date = fields.start_date.ok_or_else(|| SvcLogError::MissingDate {
            field: "start date".to_string(),
        })?;
        let end_date = fields.end_date.ok_or_else(|| SvcLogError::MissingDate {
            field: "end date".to_string(),
        })?;

        Ok(Self {
            id,
            provider_id: fields.provider_id.clone(),
            service_order: fields.service_order.clone(),
            car_id: fields.car_id.clone(),
            odometer: fields.odometer,
            engine_hours: fields.engine_hours,
            start_date,
            end_date,
            service_type: fields.service_type,
            service_description: fields.service_description.clone(),
            created_at,
        })
    }

    /// Current values as an editable field set
    pub fn fields(&self) -> LogFields {
        LogFields {
            provider_id: self.provider_id.clone(),
            service_order: self.service_order.clone(),
            car_id: self.car_id.clone(),
            odometer: self.odometer,
            engine_hours: self.engine_hours,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            service_type: self.service_type,
            service_description: self.service_description.clone(),
        }
    }

    /// Replace every editable field, keeping `id` and `created_at`
    ///
    /// # Errors
    /// `MissingDate` if either calendar date is unset.
    pub fn with_fields(&self, fields: &LogFields) -> Result<Self> {
        Self::from_fields(self.id.clone(), fields, self.created_at)
    }
}
