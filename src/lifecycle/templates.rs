use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};

use crate::error::{AppError, AppResult};
use crate::models::inquiries::FieldValue;
use crate::models::inquiry_templates::{FieldKind, InquiryField};

/// Checks submitted inquiry content against a template's fields.
///
/// Keys the template does not mention are accepted as-is. Optional fields
/// left blank are not checked further.
pub fn validate_content(
    fields: &[InquiryField],
    content: &BTreeMap<String, FieldValue>,
) -> AppResult<()> {
    for field in fields {
        let value = content.get(&field.name);

        if is_blank(value) {
            if field.required {
                return Err(AppError::Validation(format!("{} is required", field.label)));
            }
            continue;
        }

        if let Some(value) = value {
            check_value(field, value)?;
        }
    }
    Ok(())
}

fn is_blank(value: Option<&FieldValue>) -> bool {
    match value {
        None => true,
        Some(FieldValue::Text(text)) => text.trim().is_empty(),
        Some(FieldValue::Flag(checked)) => !checked,
    }
}

fn check_value(field: &InquiryField, value: &FieldValue) -> AppResult<()> {
    let invalid = |what: &str| AppError::Validation(format!("{} {what}", field.label));

    match (&field.kind, value) {
        (FieldKind::Checkbox, FieldValue::Flag(_)) => Ok(()),
        (FieldKind::Checkbox, FieldValue::Text(_)) => Err(invalid("must be true or false")),
        (_, FieldValue::Flag(_)) => Err(invalid("must be text")),
        (FieldKind::Select { options }, FieldValue::Text(choice)) => {
            if options.iter().any(|option| option == choice) {
                Ok(())
            } else {
                Err(invalid("must be one of the listed options"))
            }
        }
        (FieldKind::Date, FieldValue::Text(raw)) => {
            if parse_date(raw).is_some() {
                Ok(())
            } else {
                Err(invalid("must be a date (YYYY-MM-DD)"))
            }
        }
        (FieldKind::Text | FieldKind::Textarea | FieldKind::File, FieldValue::Text(_)) => Ok(()),
    }
}

/// Checks a template definition: at least one field, unique non-empty
/// names, and every select offering at least one option.
pub fn validate_fields(fields: &[InquiryField]) -> AppResult<()> {
    if fields.is_empty() {
        return Err(AppError::Validation(
            "a template needs at least one field".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "field {} has no name",
                field.id
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(AppError::Validation(format!(
                "field name {} is used twice",
                field.name
            )));
        }
        if let FieldKind::Select { options } = &field.kind {
            if options.is_empty() {
                return Err(AppError::Validation(format!(
                    "select field {} has no options",
                    field.name
                )));
            }
        }
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, required: bool, kind: FieldKind) -> InquiryField {
        InquiryField {
            id: format!("field-{name}"),
            name: name.to_string(),
            label: name.to_string(),
            placeholder: None,
            required,
            kind,
        }
    }

    fn content(pairs: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn required_field_must_be_present_and_non_blank() {
        let fields = vec![field("product", true, FieldKind::Text)];

        let err = validate_content(&fields, &content(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: product is required");

        assert!(validate_content(&fields, &content(&[("product", text("   "))])).is_err());
        assert!(validate_content(&fields, &content(&[("product", text("Headset"))])).is_ok());
    }

    #[test]
    fn optional_blank_fields_are_skipped() {
        let fields = vec![field(
            "platform",
            false,
            FieldKind::Select {
                options: vec!["youtube".into()],
            },
        )];
        assert!(validate_content(&fields, &content(&[("platform", text(""))])).is_ok());
        assert!(validate_content(&fields, &content(&[])).is_ok());
    }

    #[test]
    fn select_value_must_be_an_option() {
        let fields = vec![field(
            "platform",
            true,
            FieldKind::Select {
                options: vec!["youtube".into(), "instagram".into()],
            },
        )];
        assert!(validate_content(&fields, &content(&[("platform", text("instagram"))])).is_ok());
        assert!(validate_content(&fields, &content(&[("platform", text("tiktok"))])).is_err());
    }

    #[test]
    fn date_accepts_plain_and_rfc3339() {
        let fields = vec![field("deadline", true, FieldKind::Date)];
        assert!(validate_content(&fields, &content(&[("deadline", text("2024-05-01"))])).is_ok());
        assert!(
            validate_content(
                &fields,
                &content(&[("deadline", text("2024-05-01T09:00:00+09:00"))])
            )
            .is_ok()
        );
        assert!(validate_content(&fields, &content(&[("deadline", text("next friday"))])).is_err());
    }

    #[test]
    fn checkbox_requires_a_boolean() {
        let fields = vec![field("agree", true, FieldKind::Checkbox)];
        let checked = content(&[("agree", FieldValue::Flag(true))]);
        assert!(validate_content(&fields, &checked).is_ok());
        let unchecked = content(&[("agree", FieldValue::Flag(false))]);
        assert!(validate_content(&fields, &unchecked).is_err());
        assert!(validate_content(&fields, &content(&[("agree", text("yes"))])).is_err());
    }

    #[test]
    fn text_fields_reject_booleans_and_extra_keys_pass() {
        let fields = vec![field("notes", false, FieldKind::Textarea)];
        assert!(validate_content(&fields, &content(&[("notes", FieldValue::Flag(true))])).is_err());
        assert!(validate_content(&fields, &content(&[("utm_source", text("ig"))])).is_ok());
    }

    #[test]
    fn template_definitions_need_unique_names_and_options() {
        assert!(validate_fields(&[]).is_err());
        assert!(
            validate_fields(&[
                field("a", true, FieldKind::Text),
                field("a", false, FieldKind::Date)
            ])
            .is_err()
        );
        assert!(
            validate_fields(&[field("pick", true, FieldKind::Select { options: vec![] })]).is_err()
        );
        assert!(
            validate_fields(&[
                field("product", true, FieldKind::Text),
                field("agree", false, FieldKind::Checkbox)
            ])
            .is_ok()
        );
    }
}
