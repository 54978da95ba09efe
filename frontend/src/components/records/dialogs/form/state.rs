//! Draft state and payload building for the record form dialog.
//!
//! The draft is a flat field-name -> string map seeded either from the
//! descriptor defaults (create) or by copying the edited record's values
//! (edit); the table's row is never aliased, so typing in the form cannot
//! change a rendered cell before save. `build_payload` is the single place
//! UI strings become typed JSON.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use common::model::record::Record;

use crate::entities::{EntityKind, FieldDef, FieldKind};

pub struct RecordFormComponent {
    pub entity: EntityKind,
    pub draft: BTreeMap<&'static str, String>,
    /// Identity of the source record; `None` means the draft creates.
    pub record_id: Option<String>,
    pub saving: bool,
    pub error: Option<String>,
    /// Labels of required fields the last submit found empty.
    pub missing: Vec<&'static str>,
}

impl RecordFormComponent {
    pub fn new(entity: EntityKind, record: Option<&Record>) -> Self {
        let descriptor = entity.descriptor();
        let draft = descriptor
            .fields
            .iter()
            .map(|field| {
                let value = match record {
                    Some(record) => edit_value(record, field),
                    None => field.default.to_string(),
                };
                (field.key, value)
            })
            .collect();

        Self {
            entity,
            draft,
            record_id: record.and_then(|record| descriptor.identity_of(record)),
            saving: false,
            error: None,
            missing: Vec::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.record_id.is_some()
    }

    pub fn value(&self, key: &str) -> &str {
        self.draft.get(key).map(String::as_str).unwrap_or("")
    }

    /// Validates required fields and coerces the draft into a typed JSON
    /// payload. `Err` carries the labels of the empty required fields; the
    /// payload never reaches the network in that case.
    pub fn build_payload(&self) -> Result<Value, Vec<&'static str>> {
        let fields = self.entity.descriptor().fields;

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|field| field.required && self.value(field.key).trim().is_empty())
            .map(|field| field.label)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut object = Map::new();
        for field in fields {
            let raw = self.value(field.key);
            let value = match &field.kind {
                FieldKind::Checkbox => Value::Bool(raw == "true"),
                FieldKind::Number | FieldKind::ForeignKey | FieldKind::Reference(_) => {
                    coerce_number(raw)
                }
                _ => Value::String(raw.to_string()),
            };
            object.insert(field.key.to_string(), value);
        }
        Ok(Value::Object(object))
    }
}

/// String form of a record value for editing: booleans as "true"/"false",
/// numbers printed plainly, null/absent as empty.
fn edit_value(record: &Record, field: &FieldDef) -> String {
    match record.get(field.key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Integer-or-null coercion for numeric and foreign-key fields. Blank
/// submits as null; integers stay integers; decimals survive for priced
/// fields; anything else is passed through for the server to validate.
fn coerce_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return Value::from(float);
    }
    Value::String(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient_record() -> Record {
        serde_json::from_value(json!({
            "pkpatientid": 42,
            "firstname": "Ada",
            "lastname": "Lovelace",
            "notes": null
        }))
        .unwrap()
    }

    #[test]
    fn create_draft_seeds_descriptor_defaults() {
        let form = RecordFormComponent::new(EntityKind::Clients, None);
        assert!(!form.is_edit());
        assert_eq!(form.value("status"), "active");
        assert_eq!(form.value("name"), "");
    }

    #[test]
    fn edit_draft_copies_record_and_captures_identity() {
        let record = patient_record();
        let form = RecordFormComponent::new(EntityKind::Patients, Some(&record));
        assert_eq!(form.record_id.as_deref(), Some("42"));
        assert_eq!(form.value("firstname"), "Ada");
        assert_eq!(form.value("notes"), "");
    }

    #[test]
    fn missing_required_fields_block_submission() {
        let mut form = RecordFormComponent::new(EntityKind::Patients, None);
        form.draft.insert("firstname", "Ada".to_string());
        let missing = form.build_payload().unwrap_err();
        assert_eq!(missing, vec!["Last Name"]);
    }

    #[test]
    fn payload_coerces_booleans_and_numbers() {
        let mut form = RecordFormComponent::new(EntityKind::Referrals, None);
        form.draft.insert("patient_id", "17".to_string());
        form.draft.insert("authorization_required", "true".to_string());
        form.draft.insert("referral_type_id", "".to_string());

        let payload = form.build_payload().unwrap();
        assert_eq!(payload["patient_id"], json!(17));
        assert_eq!(payload["authorization_required"], json!(true));
        assert_eq!(payload["referral_type_id"], Value::Null);
        assert_eq!(payload["insurance_verification"], json!(false));
    }

    #[test]
    fn decimal_prices_survive_coercion() {
        let mut form = RecordFormComponent::new(EntityKind::Services, None);
        form.draft.insert("name", "Televisit".to_string());
        form.draft.insert("price", "49.99".to_string());
        form.draft.insert("duration_minutes", "30".to_string());

        let payload = form.build_payload().unwrap();
        assert_eq!(payload["price"], json!(49.99));
        assert_eq!(payload["duration_minutes"], json!(30));
    }

    #[test]
    fn non_numeric_foreign_key_passes_through_for_server_validation() {
        let mut form = RecordFormComponent::new(EntityKind::Referrals, None);
        form.draft.insert("patient_id", "P-0042".to_string());
        let payload = form.build_payload().unwrap();
        assert_eq!(payload["patient_id"], json!("P-0042"));
    }

    #[test]
    fn editing_the_draft_never_touches_the_source_record() {
        let record = patient_record();
        let mut form = RecordFormComponent::new(EntityKind::Patients, Some(&record));
        form.draft.insert("firstname", "Grace".to_string());
        assert_eq!(record.display("firstname"), "Ada");
    }
}
