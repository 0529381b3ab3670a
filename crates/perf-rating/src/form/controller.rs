use super::sink::{DisplaySink, DisplayTarget};
use super::state::{is_unrecognized, Category, Field, FormError, FormState, InputChange};
use crate::rating::{CategoryRating, CompetencyRating, OverallRating, RatingEngine};
use tracing::{debug, warn};

/// Routes form edits to the calculators and pushes their results to a [`DisplaySink`].
///
/// Each edit re-runs the calculator of the edited category, writing that category's targets,
/// then re-derives the overall grade. The overall pass recomputes the employee job and
/// leadership ratings it needs but writes only [`DisplayTarget::OverallRating`].
pub struct FormController<S> {
    engine: RatingEngine,
    state: FormState,
    sink: S,
}

impl<S: DisplaySink> FormController<S> {
    pub fn new(engine: RatingEngine, state: FormState, sink: S) -> Self {
        Self {
            engine,
            state,
            sink,
        }
    }

    /// Startup pass over whatever values the form already holds.
    pub fn initialize(&mut self) -> OverallRating {
        for (category, row, label) in self.state.unrecognized_grades() {
            warn!(%category, row = row + 1, label, "unrecognized grade scored as 0 points");
        }

        self.refresh_department();
        self.refresh_employee();
        self.refresh_leadership();
        self.refresh_overall()
    }

    pub fn apply(&mut self, change: InputChange) -> Result<OverallRating, FormError> {
        self.state.set(&change)?;

        if change.field == Field::Grade && is_unrecognized(&change.value) {
            warn!(
                category = %change.category,
                row = change.row + 1,
                label = %change.value,
                "unrecognized grade scored as 0 points"
            );
        }

        match change.category {
            Category::Department => {
                self.refresh_department();
            }
            Category::EmployeeJob => {
                self.refresh_employee();
            }
            Category::Competency => {
                self.refresh_leadership();
            }
        }

        Ok(self.refresh_overall())
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn refresh_department(&mut self) -> CategoryRating {
        let rating = self.engine.department(&self.state.department_rows());
        debug!(
            total_weight = rating.total_weight,
            total_point = rating.total_point,
            rating = rating.rating,
            "department objectives recalculated"
        );
        self.sink
            .write(DisplayTarget::DepartmentWeight, &rating.weight_display());
        self.sink
            .write(DisplayTarget::DepartmentRating, &rating.rating_display());
        rating
    }

    fn refresh_employee(&mut self) -> CategoryRating {
        let rating = self.engine.employee(&self.state.employee_rows());
        debug!(
            total_weight = rating.total_weight,
            total_point = rating.total_point,
            rating = rating.rating,
            "employee job objectives recalculated"
        );
        self.sink
            .write(DisplayTarget::EmployeeWeight, &rating.weight_display());
        self.sink
            .write(DisplayTarget::EmployeeRating, &rating.rating_display());
        rating
    }

    fn refresh_leadership(&mut self) -> CompetencyRating {
        let rating = self.engine.leadership(&self.state.competency_grades());
        debug!(
            mode = rating.mode.label(),
            total_points = rating.total_points,
            rating = rating.rating,
            "leadership competencies recalculated"
        );
        self.sink
            .write(DisplayTarget::LeadershipRating, &rating.rating_display());
        rating
    }

    fn refresh_overall(&mut self) -> OverallRating {
        let employee = self.engine.employee(&self.state.employee_rows());
        let leadership = self.engine.leadership(&self.state.competency_grades());
        let overall = self.engine.overall(employee.rating, leadership.rating);
        debug!(
            perf_result = overall.perf_result,
            grade = overall.grade.label(),
            "overall rating derived"
        );
        self.sink
            .write(DisplayTarget::OverallRating, overall.grade.label());
        overall
    }
}
