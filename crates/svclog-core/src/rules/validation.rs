use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Field, LogFields};

/// Per-field validation messages, ordered by form position
///
/// An empty value means the candidate is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for one field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Record a failure; a later message for the same field wins
    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a candidate record
///
/// Pure and total: every rule is checked and every failing field is reported,
/// nothing short-circuits and nothing panics.
///
/// Rules:
/// 1. Provider ID, service order, car ID and description are required
///    (non-empty after trimming)
/// 2. Odometer is required, finite and greater than zero
/// 3. Engine hours are required, finite and not negative (zero is allowed
///    for a vehicle that has never run)
/// 4. Start and end dates are required, and the end date must not precede
///    the start date
pub fn validate(candidate: &LogFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let required_text = [
        (Field::ProviderId, &candidate.provider_id, "Provider ID is required"),
        (Field::ServiceOrder, &candidate.service_order, "Service Order is required"),
        (Field::CarId, &candidate.car_id, "Car ID is required"),
        (
            Field::ServiceDescription,
            &candidate.service_description,
            "Description is required",
        ),
    ];
    for (field, value, message) in required_text {
        if value.trim().is_empty() {
            errors.insert(field, message);
        }
    }

    match candidate.odometer {
        None => errors.insert(Field::Odometer, "Odometer is required"),
        Some(v) if !v.is_finite() => errors.insert(Field::Odometer, "Odometer must be a number"),
        Some(v) if v <= 0.0 => errors.insert(Field::Odometer, "Odometer must be greater than 0"),
        Some(_) => {}
    }

    match candidate.engine_hours {
        None => errors.insert(Field::EngineHours, "Engine hours are required"),
        Some(v) if !v.is_finite() => {
            errors.insert(Field::EngineHours, "Engine hours must be a number")
        }
        Some(v) if v < 0.0 => errors.insert(Field::EngineHours, "Engine hours cannot be negative"),
        Some(_) => {}
    }

    if candidate.start_date.is_none() {
        errors.insert(Field::StartDate, "Start date is required");
    }
    match (candidate.start_date, candidate.end_date) {
        (_, None) => errors.insert(Field::EndDate, "End date is required"),
        (Some(start), Some(end)) if end < start => {
            errors.insert(Field::EndDate, "End date cannot be before start date")
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceType;

    fn valid_fields() -> LogFields {
        LogFields {
            provider_id: "P1".to_string(),
            service_order: "SO-1".to_string(),
            car_id: "CAR-1".to_string(),
            odometer: Some(100.0),
            engine_hours: Some(10.0),
            start_date: Some("2024-01-01".parse().unwrap()),
            end_date: Some("2024-01-02".parse().unwrap()),
            service_type: ServiceType::Unplanned,
            service_description: "Brake pads".to_string(),
        }
    }

    #[test]
    fn test_valid_candidate_has_no_errors() {
        assert!(validate(&valid_fields()).is_valid());
    }

    #[test]
    fn test_same_day_end_date_is_allowed() {
        let mut fields = valid_fields();
        fields.end_date = fields.start_date;
        assert!(validate(&fields).is_valid());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut fields = valid_fields();
        fields.end_date = Some("2023-12-31".parse().unwrap());

        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::EndDate),
            Some("End date cannot be before start date")
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let mut fields = valid_fields();
        fields.car_id.clear();
        fields.odometer = Some(0.0);

        let rendered = validate(&fields).to_string();
        assert_eq!(
            rendered,
            "carId: Car ID is required; odometer: Odometer must be greater than 0"
        );
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut fields = valid_fields();
            fields.odometer = Some(bad);
            fields.engine_hours = Some(bad);

            let errors = validate(&fields);
            assert_eq!(errors.get(Field::Odometer), Some("Odometer must be a number"));
            assert_eq!(
                errors.get(Field::EngineHours),
                Some("Engine hours must be a number")
            );
        }
    }
}
