use std::fmt;

use tracing::debug;

use crate::component::ClassifiedField;
use crate::errors::CronError;
use crate::field::Field;
use crate::parser::StepOrigin;
use crate::Schedule;

// A cron expression whose five fields have been classified but not yet expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronPattern {
    pub minutes: ClassifiedField,       // -
    pub hours: ClassifiedField,         // --
    pub days_of_month: ClassifiedField, // --- Each schedule field with its form
    pub months: ClassifiedField,        // --
    pub days_of_week: ClassifiedField,  // -

    pub command: String,
}

impl CronPattern {
    pub fn field(&self, field: Field) -> &ClassifiedField {
        match field {
            Field::Minute => &self.minutes,
            Field::Hour => &self.hours,
            Field::DayOfMonth => &self.days_of_month,
            Field::Month => &self.months,
            Field::DayOfWeek => &self.days_of_week,
        }
    }

    /// The classified fields in expression order.
    pub fn fields(&self) -> [&ClassifiedField; 5] {
        [
            &self.minutes,
            &self.hours,
            &self.days_of_month,
            &self.months,
            &self.days_of_week,
        ]
    }

    /// Expands every field into the values it matches.
    ///
    /// Fails with [`CronError::RangeOrder`] on the first range, left to right,
    /// whose start is greater than its end.
    pub fn expand(&self, origin: StepOrigin) -> Result<Schedule, CronError> {
        let schedule = Schedule {
            minutes: self.minutes.expand(origin)?,
            hours: self.hours.expand(origin)?,
            days_of_month: self.days_of_month.expand(origin)?,
            months: self.months.expand(origin)?,
            days_of_week: self.days_of_week.expand(origin)?,
            command: self.command.clone(),
        };
        debug!(command = %schedule.command, ?origin, "expanded schedule");
        Ok(schedule)
    }
}

// Writes the normalized expression: aliases resolved, `?` replaced, command rejoined.
impl fmt::Display for CronPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            write!(f, "{} ", field.text)?;
        }
        write!(f, "{}", self.command)
    }
}
