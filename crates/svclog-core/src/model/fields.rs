use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::service_type::ServiceType;

/// Editable field set shared by drafts and committed logs
///
/// Dates and numbers are optional here because a form under edit may hold
/// cleared inputs; `ServiceLog` requires both dates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogFields {
    pub provider_id: String,
    pub service_order: String,
    pub car_id: String,
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub service_description: String,
}

impl LogFields {
    /// Fresh form values: empty text, no numbers, starting `today` and
    /// ending the day after
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            start_date: Some(today),
            end_date: Some(next_day(today)),
            ..Self::default()
        }
    }

    /// True when nothing worth persisting has been entered
    ///
    /// Every trimmable text field is empty and every numeric field is zero or
    /// absent. Dates and type are ignored since they are pre-filled.
    pub fn is_blank(&self) -> bool {
        let text_empty = [
            &self.provider_id,
            &self.service_order,
            &self.car_id,
            &self.service_description,
        ]
        .iter()
        .all(|s| s.trim().is_empty());

        let numbers_empty = [self.odometer, self.engine_hours]
            .iter()
            .all(|n| n.map_or(true, |v| v == 0.0));

        text_empty && numbers_empty
    }

    /// Apply a single field edit
    ///
    /// Setting a start date re-derives the end date as the following day.
    /// Clearing the start date leaves the end date alone.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::ProviderId(v) => self.provider_id = v,
            FieldEdit::ServiceOrder(v) => self.service_order = v,
            FieldEdit::CarId(v) => self.car_id = v,
            FieldEdit::Odometer(v) => self.odometer = v,
            FieldEdit::EngineHours(v) => self.engine_hours = v,
            FieldEdit::StartDate(v) => {
                self.start_date = v;
                if let Some(start) = v {
                    self.end_date = Some(next_day(start));
                }
            }
            FieldEdit::EndDate(v) => self.end_date = v,
            FieldEdit::ServiceType(v) => self.service_type = v,
            FieldEdit::ServiceDescription(v) => self.service_description = v,
        }
    }
}

/// The calendar day after `date` (saturates at the last representable date)
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// One user edit to one form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    ProviderId(String),
    ServiceOrder(String),
    CarId(String),
    Odometer(Option<f64>),
    EngineHours(Option<f64>),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    ServiceType(ServiceType),
    ServiceDescription(String),
}

impl FieldEdit {
    /// The field this edit targets
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::ProviderId(_) => Field::ProviderId,
            FieldEdit::ServiceOrder(_) => Field::ServiceOrder,
            FieldEdit::CarId(_) => Field::CarId,
            FieldEdit::Odometer(_) => Field::Odometer,
            FieldEdit::EngineHours(_) => Field::EngineHours,
            FieldEdit::StartDate(_) => Field::StartDate,
            FieldEdit::EndDate(_) => Field::EndDate,
            FieldEdit::ServiceType(_) => Field::ServiceType,
            FieldEdit::ServiceDescription(_) => Field::ServiceDescription,
        }
    }
}

/// Field names, ordered as they appear on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ProviderId,
    ServiceOrder,
    CarId,
    Odometer,
    EngineHours,
    StartDate,
    EndDate,
    #[serde(rename = "type")]
    ServiceType,
    ServiceDescription,
}

impl Field {
    /// Wire name of the field (matches the JSON layout)
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ProviderId => "providerId",
            Field::ServiceOrder => "serviceOrder",
            Field::CarId => "carId",
            Field::Odometer => "odometer",
            Field::EngineHours => "engineHours",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::ServiceType => "type",
            Field::ServiceDescription => "serviceDescription",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
