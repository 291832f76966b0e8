use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{QueryLensError, Result};

/// One table row, keyed by column name.
pub type Row = Map<String, Value>;

/// Tabular query result: ordered columns and rows keyed by column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableArtifact {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableArtifact {
    /// Build a table whose columns follow the key order of the first row.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Parse a `{columns, rows}` JSON value, inferring columns when the server
    /// sent rows without them.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(QueryLensError::MalformedTable(format!(
                "expected an object, got {}",
                json_type_name(&value)
            )));
        }
        let table: TableArtifact = serde_json::from_value(value)
            .map_err(|e| QueryLensError::MalformedTable(e.to_string()))?;

        if table.columns.is_empty() && !table.rows.is_empty() {
            return Ok(Self::from_rows(table.rows));
        }
        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Display text of a cell. Missing cells and nulls render empty.
    pub fn cell_text(&self, row: usize, column: &str) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(value_text)
            .unwrap_or_default()
    }
}

pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The image and/or table produced for one question.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultArtifact {
    pub image_ref: Option<String>,
    pub table: Option<TableArtifact>,
}

impl ResultArtifact {
    pub fn has_image(&self) -> bool {
        self.image_ref.is_some()
    }

    /// True when a table with at least one row is available.
    pub fn has_rows(&self) -> bool {
        self.table.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// Parsed `/question` response.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionAnswer {
    pub artifact: ResultArtifact,
    /// Server's preference for showing the plot over the table.
    pub should_plot: bool,
}

impl QuestionAnswer {
    /// Interpret the JSON body of a `/question` response.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(mut fields) = value else {
            return Err(QueryLensError::MalformedTable(
                "response is not a JSON object".into(),
            ));
        };

        let table = match fields.remove("df") {
            None | Some(Value::Null) => None,
            Some(df) => Some(TableArtifact::from_value(df)?),
        };
        let image_ref = match fields.remove("image_url") {
            Some(Value::String(url)) => normalize_image_ref(&url),
            _ => None,
        };
        let should_plot = fields
            .get("should_plot")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let artifact = ResultArtifact { image_ref, table };
        if !artifact.has_image() && !artifact.has_rows() {
            return Err(QueryLensError::MissingImage);
        }

        Ok(Self {
            artifact,
            should_plot,
        })
    }
}

/// The server stringifies a missing plot path, so `"None"` means absent.
fn normalize_image_ref(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "None" || trimmed == "null" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Deserialize)]
pub(crate) struct DescribeResponse {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum QuestionItem {
    Text(String),
    Object { text: String },
}

impl QuestionItem {
    pub fn into_text(self) -> String {
        match self {
            QuestionItem::Text(text) | QuestionItem::Object { text } => text,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RandomQuestionsResponse {
    #[serde(default)]
    pub questions: Vec<QuestionItem>,
}
