//! Parser for cron expressions.
//!
//! Invoking
//!
//! ```rust
//! # use std::str::FromStr as _;
//! #
//! # use cron_expand::{Schedule, parser::ScheduleParser};
//! #
//! Schedule::from_str("*/15 0 1,15 * 1-5 /usr/bin/find");
//! ```
//!
//! is equivalent to
//!
//! ```rust
//! # use cron_expand::parser::ScheduleParser;
//! #
//! ScheduleParser::new().parse("*/15 0 1,15 * 1-5 /usr/bin/find");
//! ```
//!
//! You can customise the parser by creating a parser builder using
//! [`ScheduleParser::builder`]. So, for example, to start `*/N` steps at the
//! first value of their field instead of at 0:
//!
//! ```rust
//! use cron_expand::parser::{ScheduleParser, StepOrigin};
//!
//! let parser = ScheduleParser::builder()
//!     .step_origin(StepOrigin::FieldStart)
//!     .build();
//!
//! let schedule = parser.parse("0 0 */10 * * backup").unwrap();
//! assert_eq!(schedule.days_of_month, vec![1, 11, 21, 31]);
//! ```

use chrono::{Month, Weekday};
use derive_builder::Builder;
use strum::EnumIs;
use tracing::debug;

use crate::{
    component::ClassifiedField, errors::CronError, field::Field, pattern::CronPattern, Schedule,
};

/// Number of tokens an expression needs: five fields and at least one command word.
pub const MIN_TOKENS: usize = 6;

static WEEKDAY_ALIASES: [(&str, Weekday); 7] = [
    ("SUN", Weekday::Sun),
    ("MON", Weekday::Mon),
    ("TUE", Weekday::Tue),
    ("WED", Weekday::Wed),
    ("THU", Weekday::Thu),
    ("FRI", Weekday::Fri),
    ("SAT", Weekday::Sat),
];

static MONTH_ALIASES: [(&str, Month); 12] = [
    ("JAN", Month::January),
    ("FEB", Month::February),
    ("MAR", Month::March),
    ("APR", Month::April),
    ("MAY", Month::May),
    ("JUN", Month::June),
    ("JUL", Month::July),
    ("AUG", Month::August),
    ("SEP", Month::September),
    ("OCT", Month::October),
    ("NOV", Month::November),
    ("DEC", Month::December),
];

/// Where a stepped field written as `*/N` starts counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, EnumIs)]
pub enum StepOrigin {
    /// Start at 0 on every field, so day of month `*/10` yields 0, 10, 20, 30.
    #[default]
    Zero,
    /// Start at the first value the field expands `*` to, so day of month
    /// `*/10` yields 1, 11, 21, 31.
    FieldStart,
}

/// Parser for cron expressions.
///
/// In order to build a custom parser use [`ScheduleParser::builder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Builder)]
#[builder(default, build_fn(skip), pattern = "owned")]
pub struct ScheduleParser {
    /// Configure where `*/N` steps start.
    step_origin: StepOrigin,
}

impl ScheduleParser {
    /// Create a new parser.
    ///
    /// You should probably be using [`Schedule`]'s implementation of
    /// [`FromStr`][std::str::FromStr] instead of invoking this.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a builder for custom parsing.
    ///
    /// Equivalent to [`ScheduleParserBuilder::default`].
    pub fn builder() -> ScheduleParserBuilder {
        ScheduleParserBuilder::default()
    }

    pub fn step_origin(&self) -> StepOrigin {
        self.step_origin
    }

    /// Classifies and expands an expression such as `*/15 0 1,15 * 1-5 /usr/bin/find`.
    pub fn parse(&self, expression: &str) -> Result<Schedule, CronError> {
        self.classify(expression)?.expand(self.step_origin)
    }

    /// Classifies every field of an expression without expanding them.
    pub fn classify(&self, expression: &str) -> Result<CronPattern, CronError> {
        let tokens = Self::tokenize(expression);
        self.classify_tokens(&tokens)
    }

    /// Classifies an expression that has already been split into tokens.
    ///
    /// The first five tokens are the schedule fields; the rest make up the
    /// command and are joined back together with single spaces.
    pub fn classify_tokens(&self, tokens: &[&str]) -> Result<CronPattern, CronError> {
        if tokens.len() < MIN_TOKENS {
            debug!(tokens = tokens.len(), "too few tokens");
            return Err(CronError::InvalidArgumentCount);
        }

        let month = Self::replace_alpha_months(&tokens[Field::Month.index()].to_uppercase());
        let day_of_week =
            Self::replace_alpha_weekdays(&tokens[Field::DayOfWeek.index()].to_uppercase());

        // Replace ? with * in day-of-month and day-of-week
        let day_of_month = tokens[Field::DayOfMonth.index()].replace('?', "*");
        let day_of_week = day_of_week.replace('?', "*");

        debug!(%month, %day_of_month, %day_of_week, "substituted aliases");

        // Fields are classified left to right, the first failure wins
        let minutes = ClassifiedField::classify(Field::Minute, tokens[Field::Minute.index()])?;
        let hours = ClassifiedField::classify(Field::Hour, tokens[Field::Hour.index()])?;
        let days_of_month = ClassifiedField::classify(Field::DayOfMonth, &day_of_month)?;
        let months = ClassifiedField::classify(Field::Month, &month)?;
        let days_of_week = ClassifiedField::classify(Field::DayOfWeek, &day_of_week)?;

        Ok(CronPattern {
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
            command: tokens[MIN_TOKENS - 1..].join(" "),
        })
    }

    /// Splits an expression on whitespace, ignoring leading, trailing and repeated separators.
    pub fn tokenize(expression: &str) -> Vec<&str> {
        expression.split_whitespace().collect()
    }

    // Converts upper case weekday names into their numbers, counting Sunday as 1.
    fn replace_alpha_weekdays(field: &str) -> String {
        let mut replaced = field.to_string();

        for &(nickname, weekday) in &WEEKDAY_ALIASES {
            replaced = replaced.replace(nickname, &weekday.number_from_sunday().to_string());
        }

        replaced
    }

    // Converts upper case month names into their numbers.
    fn replace_alpha_months(field: &str) -> String {
        let mut replaced = field.to_string();

        for &(nickname, month) in &MONTH_ALIASES {
            replaced = replaced.replace(nickname, &month.number_from_month().to_string());
        }

        replaced
    }
}

impl ScheduleParserBuilder {
    pub fn build(self) -> ScheduleParser {
        let ScheduleParserBuilder { step_origin } = self;
        ScheduleParser {
            step_origin: step_origin.unwrap_or_default(),
        }
    }
}
