use super::state::{Category, FormState, RowInput};
use crate::rating::RatingConfig;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum FormImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownCategory { line: u64, value: String },
    RowOutOfRange {
        line: u64,
        category: Category,
        row: usize,
        rows: usize,
    },
}

impl std::fmt::Display for FormImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormImportError::Io(err) => write!(f, "failed to read form file: {}", err),
            FormImportError::Csv(err) => write!(f, "invalid form CSV data: {}", err),
            FormImportError::Json(err) => write!(f, "invalid form JSON data: {}", err),
            FormImportError::UnknownCategory { line, value } => write!(
                f,
                "line {}: unknown category '{}' (expected department, employee or competency)",
                line, value
            ),
            FormImportError::RowOutOfRange {
                line,
                category,
                row,
                rows,
            } => write!(
                f,
                "line {}: {} row {} is outside 1..={}",
                line, category, row, rows
            ),
        }
    }
}

impl std::error::Error for FormImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormImportError::Io(err) => Some(err),
            FormImportError::Csv(err) => Some(err),
            FormImportError::Json(err) => Some(err),
            FormImportError::UnknownCategory { .. } | FormImportError::RowOutOfRange { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for FormImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FormImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for FormImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads saved form contents from JSON (the [`FormState`] layout) or from a
/// `Category,Row,Weight,Grade` CSV sheet.
pub struct FormImporter;

impl FormImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        config: &RatingConfig,
    ) -> Result<FormState, FormImportError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let file = std::fs::File::open(path)?;

        if is_csv {
            Self::from_csv_reader(file, config)
        } else {
            Self::from_json_reader(file, config)
        }
    }

    /// JSON documents are padded or truncated to the configured row counts; padded employee
    /// job rows are absent.
    pub fn from_json_reader<R: Read>(
        reader: R,
        config: &RatingConfig,
    ) -> Result<FormState, FormImportError> {
        let mut state: FormState = serde_json::from_reader(reader)?;

        state
            .department
            .resize(config.department_rows, RowInput::default());
        state.employee.resize(config.employee_rows, None);
        state
            .competencies
            .resize(config.competency_rows, String::new());

        Ok(state)
    }

    pub fn from_csv_reader<R: Read>(
        reader: R,
        config: &RatingConfig,
    ) -> Result<FormState, FormImportError> {
        let mut state = FormState::blank(config);
        state.employee.iter_mut().for_each(|row| *row = None);

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: SheetRow = record.deserialize(Some(&headers))?;
            let category =
                Category::parse(&row.category).ok_or_else(|| FormImportError::UnknownCategory {
                    line,
                    value: row.category.clone(),
                })?;
            apply_row(&mut state, category, line, row)?;
        }

        Ok(state)
    }
}

fn apply_row(
    state: &mut FormState,
    category: Category,
    line: u64,
    row: SheetRow,
) -> Result<(), FormImportError> {
    let rows = match category {
        Category::Department => state.department.len(),
        Category::EmployeeJob => state.employee.len(),
        Category::Competency => state.competencies.len(),
    };
    if row.row == 0 || row.row > rows {
        return Err(FormImportError::RowOutOfRange {
            line,
            category,
            row: row.row,
            rows,
        });
    }

    let idx = row.row - 1;
    match category {
        Category::Department => state.department[idx] = RowInput::new(row.weight, row.grade),
        Category::EmployeeJob => state.employee[idx] = Some(RowInput::new(row.weight, row.grade)),
        Category::Competency => state.competencies[idx] = row.grade,
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "Weight", default)]
    weight: String,
    #[serde(rename = "Grade", default)]
    grade: String,
}
