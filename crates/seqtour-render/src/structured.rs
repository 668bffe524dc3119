//! Structured serialization of dumped values.
//!
//! Each labelled value becomes one [`Record`]. JSON writes one compact
//! object per line, YAML one document per record, and CSV one row per record
//! with the value itself encoded as compact JSON in the last column.

use serde::Serialize;
use serde_json::Value;

use crate::error::DumpError;
use crate::output::OutputMode;

/// A labelled value together with the section it was dumped in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<'a> {
    pub category: &'a str,
    pub label: &'a str,
    pub value: &'a Value,
}

/// Header row written once at the top of CSV output.
pub const CSV_HEADER: [&str; 3] = ["category", "label", "value"];

/// Serializes one record in the given structured mode.
///
/// The returned text ends with a newline. Returns an error for the text
/// modes, which are rendered by [`crate::text`] instead.
pub fn serialize_record(record: &Record<'_>, mode: OutputMode) -> Result<String, DumpError> {
    match mode {
        OutputMode::Json => Ok(format!("{}\n", serde_json::to_string(record)?)),
        OutputMode::Yaml => Ok(format!("---\n{}", serde_yaml::to_string(record)?)),
        OutputMode::Csv => csv_row([
            record.category,
            record.label,
            value_to_cell(record.value).as_str(),
        ]),
        other => Err(DumpError::Serialization(format!(
            "'{}' is not a structured output mode",
            other
        ))),
    }
}

/// Encodes a single CSV row, quoting as needed.
pub fn csv_row<'a, I>(cells: I) -> Result<String, DumpError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(cells)?;
    let bytes = wtr.into_inner()?;
    String::from_utf8(bytes).map_err(|e| DumpError::Serialization(e.to_string()))
}

/// Converts a value to a CSV cell: strings stay bare, everything else is JSON.
fn value_to_cell(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(value: &Value) -> Record<'_> {
        Record {
            category: "Filtering",
            label: "Where",
            value,
        }
    }

    #[test]
    fn test_json_record_is_one_line() {
        let value = json!([4]);
        let out = serialize_record(&sample(&value), OutputMode::Json).unwrap();
        assert_eq!(out, "{\"category\":\"Filtering\",\"label\":\"Where\",\"value\":[4]}\n");
    }

    #[test]
    fn test_yaml_record_is_a_document() {
        let value = json!({"name": "rbo", "age": 36});
        let out = serialize_record(&sample(&value), OutputMode::Yaml).unwrap();
        assert!(out.starts_with("---\n"));
        assert!(out.contains("label: Where"));
        assert!(out.contains("name: rbo"));
        assert!(out.contains("age: 36"));
    }

    #[test]
    fn test_csv_record_quotes_json_value() {
        let value = json!([1, 2, 3]);
        let out = serialize_record(&sample(&value), OutputMode::Csv).unwrap();
        assert_eq!(out, "Filtering,Where,\"[1,2,3]\"\n");
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(csv_row(CSV_HEADER).unwrap(), "category,label,value\n");
    }

    #[test]
    fn test_text_modes_are_rejected() {
        let value = json!(1);
        assert!(serialize_record(&sample(&value), OutputMode::Text).is_err());
        assert!(serialize_record(&sample(&value), OutputMode::Term).is_err());
    }
}
