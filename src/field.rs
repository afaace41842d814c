use strum::{Display, EnumCount, EnumIter};

/// The five schedule positions of a cron expression, in the order they are written.
///
/// The `Display` form is the label used when the expanded schedule is rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    #[strum(to_string = "minute")]
    Minute,
    #[strum(to_string = "hour")]
    Hour,
    #[strum(to_string = "day of month")]
    DayOfMonth,
    #[strum(to_string = "month")]
    Month,
    #[strum(to_string = "day of week")]
    DayOfWeek,
}

/// Static description of the values a field accepts and how it expands.
///
/// `min`/`max` bound the values the grammar accepts. `limit` (exclusive) and
/// `range_start_from` bound the expansion of `*` and stepped fields; they do not
/// have to agree with the grammar bounds (day of week accepts 0 but expands `*`
/// from 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDomain {
    pub min: u8,
    pub max: u8,
    /// Largest increment accepted after `/`. The smallest is always 1.
    pub step_max: u8,
    /// Longest accepted token, in digits.
    pub max_digits: usize,
    /// Whether two-digit tokens may start with `0`, as in `05`.
    pub leading_zero: bool,
    pub limit: u8,
    pub range_start_from: u8,
}

static DOMAINS: [FieldDomain; Field::COUNT] = [
    // Minute
    FieldDomain {
        min: 0,
        max: 59,
        step_max: 59,
        max_digits: 2,
        leading_zero: true,
        limit: 60,
        range_start_from: 0,
    },
    // Hour
    FieldDomain {
        min: 0,
        max: 23,
        step_max: 23,
        max_digits: 2,
        leading_zero: true,
        limit: 24,
        range_start_from: 0,
    },
    // Day of month
    FieldDomain {
        min: 1,
        max: 31,
        step_max: 31,
        max_digits: 2,
        leading_zero: false,
        limit: 32,
        range_start_from: 1,
    },
    // Month
    FieldDomain {
        min: 1,
        max: 12,
        step_max: 12,
        max_digits: 2,
        leading_zero: false,
        limit: 13,
        range_start_from: 1,
    },
    // Day of week
    FieldDomain {
        min: 0,
        max: 6,
        step_max: 6,
        max_digits: 1,
        leading_zero: false,
        limit: 8,
        range_start_from: 1,
    },
];

impl Field {
    /// Position of the field in the expression, starting at 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn domain(self) -> &'static FieldDomain {
        &DOMAINS[self.index()]
    }
}

impl FieldDomain {
    /// Parses a single value token, such as the `15` in `1,15` or either side of `1-5`.
    pub fn value(&self, token: &str) -> Option<u8> {
        self.number(token, self.min, self.max)
    }

    /// Parses the increment of a stepped field, the part after `/`.
    pub fn increment(&self, token: &str) -> Option<u8> {
        self.number(token, 1, self.step_max)
    }

    fn number(&self, token: &str, low: u8, high: u8) -> Option<u8> {
        if token.is_empty()
            || token.len() > self.max_digits
            || !token.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        if token.len() > 1 && token.starts_with('0') && !self.leading_zero {
            return None;
        }
        let number = token.parse::<u8>().ok()?;
        (low..=high).contains(&number).then_some(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fields_iterate_in_expression_order() {
        let fields: Vec<Field> = Field::iter().collect();
        assert_eq!(
            fields,
            vec![
                Field::Minute,
                Field::Hour,
                Field::DayOfMonth,
                Field::Month,
                Field::DayOfWeek
            ]
        );
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Minute.to_string(), "minute");
        assert_eq!(Field::DayOfMonth.to_string(), "day of month");
        assert_eq!(Field::DayOfWeek.to_string(), "day of week");
    }

    #[rstest]
    #[case(Field::Minute, 60, 0)]
    #[case(Field::Hour, 24, 0)]
    #[case(Field::DayOfMonth, 32, 1)]
    #[case(Field::Month, 13, 1)]
    #[case(Field::DayOfWeek, 8, 1)]
    fn test_expansion_bounds(#[case] field: Field, #[case] limit: u8, #[case] start: u8) {
        assert_eq!(field.domain().limit, limit);
        assert_eq!(field.domain().range_start_from, start);
    }

    #[rstest]
    #[case(Field::Minute, "0", Some(0))]
    #[case(Field::Minute, "59", Some(59))]
    #[case(Field::Minute, "05", Some(5))]
    #[case(Field::Minute, "60", None)]
    #[case(Field::Minute, "005", None)]
    #[case(Field::Hour, "07", Some(7))]
    #[case(Field::Hour, "23", Some(23))]
    #[case(Field::Hour, "24", None)]
    #[case(Field::DayOfMonth, "1", Some(1))]
    #[case(Field::DayOfMonth, "31", Some(31))]
    #[case(Field::DayOfMonth, "0", None)]
    #[case(Field::DayOfMonth, "01", None)]
    #[case(Field::DayOfMonth, "32", None)]
    #[case(Field::Month, "12", Some(12))]
    #[case(Field::Month, "13", None)]
    #[case(Field::Month, "09", None)]
    #[case(Field::DayOfWeek, "0", Some(0))]
    #[case(Field::DayOfWeek, "6", Some(6))]
    #[case(Field::DayOfWeek, "7", None)]
    #[case(Field::DayOfWeek, "01", None)]
    #[case(Field::Minute, "", None)]
    #[case(Field::Minute, "+5", None)]
    #[case(Field::Minute, "1a", None)]
    fn test_value(#[case] field: Field, #[case] token: &str, #[case] expected: Option<u8>) {
        assert_eq!(field.domain().value(token), expected);
    }

    #[rstest]
    #[case(Field::Minute, "59", Some(59))]
    #[case(Field::Minute, "01", Some(1))]
    #[case(Field::Minute, "0", None)]
    #[case(Field::Minute, "00", None)]
    #[case(Field::Hour, "23", Some(23))]
    #[case(Field::Hour, "24", None)]
    #[case(Field::DayOfMonth, "31", Some(31))]
    #[case(Field::Month, "12", Some(12))]
    #[case(Field::DayOfWeek, "6", Some(6))]
    #[case(Field::DayOfWeek, "0", None)]
    #[case(Field::DayOfWeek, "7", None)]
    fn test_increment(#[case] field: Field, #[case] token: &str, #[case] expected: Option<u8>) {
        assert_eq!(field.domain().increment(token), expected);
    }
}
