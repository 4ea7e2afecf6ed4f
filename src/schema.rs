//! Table schema derivation
//!
//! Maps the source's table-schema payload into the field-level metadata
//! attached to a downloaded resource: slugged keys, pass-through
//! descriptions, and a value separator on array-typed columns only.

use crate::api::TableSchemaPayload;
use crate::types::SchemaField;

/// Separator used when the source dialect gives none, or a bare comma
pub const DEFAULT_ARRAY_SEPARATOR: &str = ", ";

/// Lowercase, ASCII-safe slug of a column name. Runs of anything that is
/// not an ASCII alphanumeric collapse to a single `_`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_separator_run = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            in_separator_run = false;
        } else if !in_separator_run {
            slug.push('_');
            in_separator_run = true;
        }
    }
    slug
}

/// Separator for an array-typed column: the dialect delimiter as-is,
/// except that a bare comma (or no delimiter at all) becomes `", "`.
pub fn array_separator(delimiter: Option<&str>) -> String {
    match delimiter {
        Some(d) if d != "," => d.to_string(),
        _ => DEFAULT_ARRAY_SEPARATOR.to_string(),
    }
}

/// Derive the resource schema from a table-schema payload
pub fn fields_from_payload(payload: &TableSchemaPayload) -> Vec<SchemaField> {
    let delimiter = payload
        .dialect
        .as_ref()
        .and_then(|d| d.delimiter.as_deref());

    payload
        .schema
        .fields
        .iter()
        .map(|field| SchemaField {
            key: slugify(&field.name),
            title: field.title.clone().unwrap_or_else(|| field.name.clone()),
            description: field.description.clone(),
            separator: match field.field_type.as_deref() {
                Some("array") => Some(array_separator(delimiter)),
                _ => None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FieldList, RawField, SchemaDialect};
    use test_case::test_case;

    #[test_case("Field Name", "field_name"; "space collapses")]
    #[test_case("ALLCAPS", "allcaps"; "lowercased")]
    #[test_case("a--b__c", "a_b_c"; "runs collapse to one underscore")]
    #[test_case("Prénom", "pr_nom"; "non ascii collapses")]
    #[test_case("total (%)", "total_"; "trailing run keeps one underscore")]
    #[test_case("  lead", "_lead"; "leading run keeps one underscore")]
    fn test_slugify(input: &str, expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_array_separator_defaults() {
        assert_eq!(array_separator(None), ", ");
        assert_eq!(array_separator(Some(",")), ", ");
        assert_eq!(array_separator(Some(";")), ";");
        assert_eq!(array_separator(Some(" | ")), " | ");
    }

    fn field(name: &str, field_type: Option<&str>) -> RawField {
        RawField {
            name: name.to_string(),
            field_type: field_type.map(String::from),
            title: None,
            description: None,
        }
    }

    #[test]
    fn test_separator_only_on_array_fields() {
        let payload = TableSchemaPayload {
            name: None,
            title: None,
            schema: FieldList {
                fields: vec![field("Tags", Some("array")), field("Name", Some("string"))],
            },
            dialect: Some(SchemaDialect {
                delimiter: Some(",".to_string()),
            }),
        };

        let fields = fields_from_payload(&payload);
        assert_eq!(fields[0].separator.as_deref(), Some(", "));
        assert_eq!(fields[1].separator, None);
    }

    #[test]
    fn test_custom_delimiter_passes_through() {
        let payload = TableSchemaPayload {
            name: None,
            title: None,
            schema: FieldList {
                fields: vec![field("Tags", Some("array"))],
            },
            dialect: Some(SchemaDialect {
                delimiter: Some(";".to_string()),
            }),
        };

        let fields = fields_from_payload(&payload);
        assert_eq!(fields[0].separator.as_deref(), Some(";"));
    }

    #[test]
    fn test_title_and_description_pass_through() {
        let payload = TableSchemaPayload {
            name: None,
            title: None,
            schema: FieldList {
                fields: vec![RawField {
                    name: "Unit Price".to_string(),
                    field_type: Some("number".to_string()),
                    title: Some("Unit price".to_string()),
                    description: Some("EUR, tax included".to_string()),
                }],
            },
            dialect: None,
        };

        let fields = fields_from_payload(&payload);
        assert_eq!(fields[0].key, "unit_price");
        assert_eq!(fields[0].title, "Unit price");
        assert_eq!(fields[0].description.as_deref(), Some("EUR, tax included"));
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let payload = TableSchemaPayload {
            name: None,
            title: None,
            schema: FieldList {
                fields: vec![field("Amount", None)],
            },
            dialect: None,
        };

        let fields = fields_from_payload(&payload);
        assert_eq!(fields[0].title, "Amount");
    }
}
