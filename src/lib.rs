//! # cron-expand
//!
//! cron-expand parses five-field cron expressions followed by a command and
//! expands every field into the concrete values it matches.
//!
//! ## Example
//!
//! ```rust
//! use cron_expand::Schedule;
//!
//! let schedule: Schedule = "*/15 0 1,15 * 1-5 /usr/bin/find".parse().unwrap();
//!
//! assert_eq!(schedule.minutes, vec![0, 15, 30, 45]);
//! assert_eq!(schedule.hours, vec![0]);
//! assert_eq!(schedule.days_of_month, vec![1, 15]);
//! assert_eq!(schedule.days_of_week, vec![1, 2, 3, 4, 5]);
//! assert_eq!(schedule.command, "/usr/bin/find");
//!
//! println!("{schedule}");
//! ```
//!
//! ## Pattern
//!
//! ```text
//! // ┌──────────────── minute (0 - 59)
//! // │ ┌────────────── hour (0 - 23)
//! // │ │ ┌──────────── day of month (1 - 31)
//! // │ │ │ ┌────────── month (1 - 12, JAN-DEC)
//! // │ │ │ │ ┌──────── day of week (0 - 6, SUN-FRI as 1-6)
//! // │ │ │ │ │ ┌────── command, may contain spaces
//! // │ │ │ │ │ │
//! // * * * * * command
//! ```
//!
//! | Field        | Allowed values  | Step increments | Remarks                          |
//! | ------------ | --------------- | --------------- | -------------------------------- |
//! | Minute       | 0-59            | 1-59            | Leading zero allowed             |
//! | Hour         | 0-23            | 1-23            | Leading zero allowed             |
//! | Day of Month | 1-31            | 1-31            | `?` is the same as `*`           |
//! | Month        | 1-12 or JAN-DEC | 1-12            |                                  |
//! | Day of Week  | 0-6             | 1-6             | `?` is the same as `*`, SUN is 1 |
//!
//! Every field is written as `*`, a single value `5`, a range `1-5`, a list
//! `1,15,30` or a step `*/15` / `5/15`.
//!
//! `*` expands day of month, month and day of week from 1, minute and hour
//! from 0. A stepped field `*/N` starts at 0 unless the parser is configured
//! with [`parser::StepOrigin::FieldStart`].

pub mod component;
pub mod errors;
pub mod field;
pub mod parser;
pub mod pattern;
pub mod render;

pub use errors::CronError;
pub use field::Field;
use parser::ScheduleParser;
use render::Table;
use std::fmt;
use std::str::FromStr;

// The Schedule struct holds every value each field of a cron expression matches, and its command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    pub minutes: Vec<u8>,
    pub hours: Vec<u8>,
    pub days_of_month: Vec<u8>,
    pub months: Vec<u8>,
    pub days_of_week: Vec<u8>,
    pub command: String,
}

impl Schedule {
    /// The expanded values of one field.
    pub fn values(&self, field: Field) -> &[u8] {
        match field {
            Field::Minute => &self.minutes,
            Field::Hour => &self.hours,
            Field::DayOfMonth => &self.days_of_month,
            Field::Month => &self.months,
            Field::DayOfWeek => &self.days_of_week,
        }
    }

    /// Lays the schedule out as a table: one row per field, values separated
    /// by spaces, then a `command` row.
    pub fn to_table(&self) -> Table {
        use strum::IntoEnumIterator;

        let mut table = Table::new();
        for field in Field::iter() {
            let values: Vec<String> = self.values(field).iter().map(u8::to_string).collect();
            table.add_row(field.to_string(), values.join(" "));
        }
        table.add_row("command", self.command.as_str());
        table
    }
}

// Enables parsing a Schedule from a string slice with the default parser.
impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(expression: &str) -> Result<Schedule, CronError> {
        ScheduleParser::new().parse(expression)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}
