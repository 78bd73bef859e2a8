use serde_json::{Value, json};

/// Columns that can be rendered as a dropdown when their value set is small.
const SELECT_CARDINALITY_LIMIT: usize = 10;

/// Infers a form schema from imported rows: numeric columns become `number`
/// fields, low-cardinality text columns become `select` fields with options,
/// everything else is free `text`.
pub fn infer_form_schema(columns: &[String], rows: &[serde_json::Map<String, Value>]) -> Value {
    let mut fields = Vec::with_capacity(columns.len());

    for column in columns {
        let values: Vec<&Value> = rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|v| !v.is_null())
            .collect();

        let field = if !values.is_empty() && values.iter().all(|v| v.is_number()) {
            json!({"name": column, "label": column, "type": "number"})
        } else {
            let mut options: Vec<String> = Vec::new();
            for value in &values {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                if !options.contains(&text) {
                    options.push(text);
                }
            }

            if !options.is_empty() && options.len() <= SELECT_CARDINALITY_LIMIT {
                json!({"name": column, "label": column, "type": "select", "options": options})
            } else {
                json!({"name": column, "label": column, "type": "text"})
            }
        };

        fields.push(field);
    }

    json!({ "fields": fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> serde_json::Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn numeric_columns_become_number_fields() {
        let columns = vec!["Item_Cek_ID".to_string()];
        let rows = vec![
            row(&[("Item_Cek_ID", json!(3))]),
            row(&[("Item_Cek_ID", json!(14))]),
        ];

        let schema = infer_form_schema(&columns, &rows);
        assert_eq!(schema["fields"][0]["type"], "number");
    }

    #[test]
    fn low_cardinality_columns_become_selects() {
        let columns = vec!["Shift".to_string()];
        let rows = vec![
            row(&[("Shift", json!("Pagi"))]),
            row(&[("Shift", json!("Malam"))]),
            row(&[("Shift", json!("Pagi"))]),
        ];

        let schema = infer_form_schema(&columns, &rows);
        assert_eq!(schema["fields"][0]["type"], "select");
        assert_eq!(schema["fields"][0]["options"], json!(["Pagi", "Malam"]));
    }

    #[test]
    fn empty_columns_fall_back_to_text() {
        let columns = vec!["Catatan".to_string()];
        let schema = infer_form_schema(&columns, &[]);
        assert_eq!(schema["fields"][0]["type"], "text");
    }
}
