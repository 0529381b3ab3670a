use crate::rating::{Grade, RatingConfig, RatingSheet, Row};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Raw weight and grade exactly as the form field holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowInput {
    #[serde(default, deserialize_with = "raw_field")]
    pub weight: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub grade: String,
}

impl RowInput {
    pub fn new(weight: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            grade: grade.into(),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::from_raw(&self.weight, &self.grade)
    }
}

/// Current contents of every input on the form. Employee job rows may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub department: Vec<RowInput>,
    #[serde(default)]
    pub employee: Vec<Option<RowInput>>,
    #[serde(default)]
    pub competencies: Vec<String>,
}

impl FormState {
    /// Empty form with the configured row counts and every employee job row present.
    pub fn blank(config: &RatingConfig) -> Self {
        Self {
            department: vec![RowInput::default(); config.department_rows],
            employee: vec![Some(RowInput::default()); config.employee_rows],
            competencies: vec![String::new(); config.competency_rows],
        }
    }

    pub fn department_rows(&self) -> Vec<Row> {
        self.department.iter().map(RowInput::to_row).collect()
    }

    pub fn employee_rows(&self) -> Vec<Option<Row>> {
        self.employee
            .iter()
            .map(|input| input.as_ref().map(RowInput::to_row))
            .collect()
    }

    pub fn competency_grades(&self) -> Vec<Grade> {
        self.competencies
            .iter()
            .map(|label| Grade::from_label_or_lowest(label))
            .collect()
    }

    pub fn to_sheet(&self) -> RatingSheet {
        RatingSheet {
            department: self.department_rows(),
            employee: self.employee_rows(),
            competencies: self.competency_grades(),
        }
    }

    /// Non-empty grade labels that are not one of the known grades, with their location.
    pub fn unrecognized_grades(&self) -> Vec<(Category, usize, &str)> {
        let department = self
            .department
            .iter()
            .enumerate()
            .map(|(idx, input)| (Category::Department, idx, input.grade.as_str()));
        let employee = self
            .employee
            .iter()
            .enumerate()
            .filter_map(|(idx, input)| {
                input
                    .as_ref()
                    .map(|input| (Category::EmployeeJob, idx, input.grade.as_str()))
            });
        let competencies = self
            .competencies
            .iter()
            .enumerate()
            .map(|(idx, label)| (Category::Competency, idx, label.as_str()));

        department
            .chain(employee)
            .chain(competencies)
            .filter(|(_, _, label)| is_unrecognized(label))
            .collect()
    }

    /// Writes one edit into the state. Rejected edits leave the state untouched.
    pub fn set(&mut self, change: &InputChange) -> Result<(), FormError> {
        let InputChange {
            category,
            row,
            field,
            value,
        } = change;

        match category {
            Category::Department => {
                let rows = self.department.len();
                let input = self
                    .department
                    .get_mut(*row)
                    .ok_or(FormError::RowOutOfRange {
                        category: *category,
                        row: *row,
                        rows,
                    })?;
                input.assign(*field, value);
            }
            Category::EmployeeJob => {
                let rows = self.employee.len();
                let slot = self.employee.get_mut(*row).ok_or(FormError::RowOutOfRange {
                    category: *category,
                    row: *row,
                    rows,
                })?;
                let input = slot.as_mut().ok_or(FormError::AbsentRow { row: *row })?;
                input.assign(*field, value);
            }
            Category::Competency => {
                if *field == Field::Weight {
                    return Err(FormError::NoWeightField {
                        category: *category,
                    });
                }
                let rows = self.competencies.len();
                let label = self
                    .competencies
                    .get_mut(*row)
                    .ok_or(FormError::RowOutOfRange {
                        category: *category,
                        row: *row,
                        rows,
                    })?;
                *label = value.clone();
            }
        }

        Ok(())
    }
}

impl RowInput {
    fn assign(&mut self, field: Field, value: &str) {
        match field {
            Field::Weight => self.weight = value.to_string(),
            Field::Grade => self.grade = value.to_string(),
        }
    }
}

pub(crate) fn is_unrecognized(label: &str) -> bool {
    !label.is_empty() && Grade::from_label(label).is_none()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Department,
    EmployeeJob,
    Competency,
}

impl Category {
    /// Accepts the long names and the short `dept`/`emp`/`comp` forms, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "department" | "dept" => Some(Self::Department),
            "employee" | "emp" => Some(Self::EmployeeJob),
            "competency" | "comp" => Some(Self::Competency),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Department => "department objectives",
            Self::EmployeeJob => "employee job objectives",
            Self::Competency => "leadership competencies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Weight,
    Grade,
}

/// A single edit made on the form; `row` is zero-based and reported one-based in errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub category: Category,
    pub row: usize,
    pub field: Field,
    pub value: String,
}

impl InputChange {
    pub fn new(category: Category, row: usize, field: Field, value: impl Into<String>) -> Self {
        Self {
            category,
            row,
            field,
            value: value.into(),
        }
    }

    pub fn department_weight(row: usize, value: impl Into<String>) -> Self {
        Self::new(Category::Department, row, Field::Weight, value)
    }

    pub fn department_grade(row: usize, value: impl Into<String>) -> Self {
        Self::new(Category::Department, row, Field::Grade, value)
    }

    pub fn employee_weight(row: usize, value: impl Into<String>) -> Self {
        Self::new(Category::EmployeeJob, row, Field::Weight, value)
    }

    pub fn employee_grade(row: usize, value: impl Into<String>) -> Self {
        Self::new(Category::EmployeeJob, row, Field::Grade, value)
    }

    pub fn competency_grade(row: usize, value: impl Into<String>) -> Self {
        Self::new(Category::Competency, row, Field::Grade, value)
    }
}

/// Edits the form cannot route to an existing input.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{category} row {number} is out of range (form has {rows} rows)", number = .row + 1)]
    RowOutOfRange {
        category: Category,
        row: usize,
        rows: usize,
    },
    #[error("employee job objectives row {number} is not present on the form", number = .row + 1)]
    AbsentRow { row: usize },
    #[error("{category} rows have no weight field")]
    NoWeightField { category: Category },
}

fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Text(text)) => text,
        Some(RawField::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
