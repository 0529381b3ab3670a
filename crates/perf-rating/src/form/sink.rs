use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Output slots the form renders calculator results into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTarget {
    DepartmentWeight,
    DepartmentRating,
    EmployeeWeight,
    EmployeeRating,
    LeadershipRating,
    OverallRating,
}

impl DisplayTarget {
    pub const ALL: [DisplayTarget; 6] = [
        DisplayTarget::DepartmentWeight,
        DisplayTarget::DepartmentRating,
        DisplayTarget::EmployeeWeight,
        DisplayTarget::EmployeeRating,
        DisplayTarget::LeadershipRating,
        DisplayTarget::OverallRating,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::DepartmentWeight => "department_weight",
            Self::DepartmentRating => "department_rating",
            Self::EmployeeWeight => "employee_weight",
            Self::EmployeeRating => "employee_rating",
            Self::LeadershipRating => "leadership_rating",
            Self::OverallRating => "overall_rating",
        }
    }
}

impl fmt::Display for DisplayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Write-only boundary between the calculators and whatever presents their results.
pub trait DisplaySink {
    fn write(&mut self, target: DisplayTarget, text: &str);
}

/// Keeps the latest text per target plus every write in order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDisplay {
    latest: BTreeMap<DisplayTarget, String>,
    writes: Vec<(DisplayTarget, String)>,
}

impl InMemoryDisplay {
    pub fn get(&self, target: DisplayTarget) -> Option<&str> {
        self.latest.get(&target).map(String::as_str)
    }

    pub fn writes(&self) -> &[(DisplayTarget, String)] {
        &self.writes
    }

    pub fn written_targets(&self) -> Vec<DisplayTarget> {
        self.writes.iter().map(|(target, _)| *target).collect()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl DisplaySink for InMemoryDisplay {
    fn write(&mut self, target: DisplayTarget, text: &str) {
        self.latest.insert(target, text.to_string());
        self.writes.push((target, text.to_string()));
    }
}
