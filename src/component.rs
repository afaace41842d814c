use std::fmt;

use strum::{Display, EnumIs, EnumIter, IntoEnumIterator};
use tracing::trace;

use crate::errors::CronError;
use crate::field::{Field, FieldDomain};
use crate::parser::StepOrigin;

/// The grammatical form of a single cron field.
///
/// Variants are listed in the order the classifier tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormKind {
    All,
    Specific,
    Range,
    List,
    Step,
}

/// A field's form together with the values parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum FieldForm {
    /// `*`
    All,
    /// `5`
    Specific(u8),
    /// `1-5`. The start may exceed the end; that is only rejected on expansion.
    Range { start: u8, end: u8 },
    /// `1,15,30`, in the order written.
    List(Vec<u8>),
    /// `*/15` or `5/15`. A `None` start stands for `*`.
    Step { start: Option<u8>, increment: u8 },
}

impl FormKind {
    /// Matches the whole of `text` against this form, using the value rules of `domain`.
    pub fn matches(self, text: &str, domain: &FieldDomain) -> Option<FieldForm> {
        match self {
            FormKind::All => (text == "*").then_some(FieldForm::All),
            FormKind::Specific => domain.value(text).map(FieldForm::Specific),
            FormKind::Range => {
                let (start, end) = text.split_once('-')?;
                Some(FieldForm::Range {
                    start: domain.value(start)?,
                    end: domain.value(end)?,
                })
            }
            FormKind::List => {
                if !text.contains(',') {
                    return None;
                }
                text.split(',')
                    .map(|token| domain.value(token))
                    .collect::<Option<Vec<u8>>>()
                    .map(FieldForm::List)
            }
            FormKind::Step => {
                let (start, increment) = text.split_once('/')?;
                let start = match start {
                    "*" => None,
                    value => Some(domain.value(value)?),
                };
                Some(FieldForm::Step {
                    start,
                    increment: domain.increment(increment)?,
                })
            }
        }
    }
}

impl FieldForm {
    pub fn kind(&self) -> FormKind {
        match self {
            FieldForm::All => FormKind::All,
            FieldForm::Specific(_) => FormKind::Specific,
            FieldForm::Range { .. } => FormKind::Range,
            FieldForm::List(_) => FormKind::List,
            FieldForm::Step { .. } => FormKind::Step,
        }
    }
}

impl fmt::Display for FieldForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldForm::All => write!(f, "*"),
            FieldForm::Specific(value) => write!(f, "{value}"),
            FieldForm::Range { start, end } => write!(f, "{start}-{end}"),
            FieldForm::List(values) => {
                let values: Vec<String> = values.iter().map(u8::to_string).collect();
                write!(f, "{}", values.join(","))
            }
            FieldForm::Step {
                start: Some(start),
                increment,
            } => write!(f, "{start}/{increment}"),
            FieldForm::Step {
                start: None,
                increment,
            } => write!(f, "*/{increment}"),
        }
    }
}

/// One schedule field after classification: which field it is, the text it was
/// classified from and the form that text matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedField {
    pub field: Field,
    /// Field text after alias and `?` substitution.
    pub text: String,
    pub form: FieldForm,
}

impl ClassifiedField {
    /// Classifies `text` as one of the five forms allowed for `field`.
    ///
    /// Forms are tried in the order all, specific, range, list, step, and the
    /// first one matching the whole text wins.
    pub fn classify(field: Field, text: &str) -> Result<Self, CronError> {
        let domain = field.domain();
        let form = FormKind::iter()
            .find_map(|kind| kind.matches(text, domain))
            .ok_or_else(|| CronError::InvalidExpression(text.to_string()))?;

        trace!(%field, text, kind = %form.kind(), "classified field");

        Ok(Self {
            field,
            text: text.to_string(),
            form,
        })
    }

    /// Expands the field within its own domain.
    pub fn expand(&self, origin: StepOrigin) -> Result<Vec<u8>, CronError> {
        let domain = self.field.domain();
        let values = expand(&self.form, domain.limit, domain.range_start_from, origin)?;
        trace!(field = %self.field, count = values.len(), "expanded field");
        Ok(values)
    }
}

/// Produces every value `form` denotes below `limit`.
///
/// `range_start_from` is where `*` starts, and where `*/N` starts under
/// [`StepOrigin::FieldStart`].
pub fn expand(
    form: &FieldForm,
    limit: u8,
    range_start_from: u8,
    origin: StepOrigin,
) -> Result<Vec<u8>, CronError> {
    match form {
        FieldForm::All => Ok((range_start_from..limit).collect()),
        FieldForm::Specific(value) => Ok(vec![*value]),
        FieldForm::Range { start, end } => {
            if start > end {
                return Err(CronError::RangeOrder {
                    start: *start,
                    end: *end,
                });
            }
            Ok((*start..=*end).collect())
        }
        FieldForm::List(values) => Ok(values.clone()),
        FieldForm::Step { start, increment } => {
            if *increment == 0 {
                return Err(CronError::InvalidExpression(form.to_string()));
            }
            let mut value = start.unwrap_or(match origin {
                StepOrigin::Zero => 0,
                StepOrigin::FieldStart => range_start_from,
            });
            let mut values = Vec::new();
            while value < limit {
                values.push(value);
                value = match value.checked_add(*increment) {
                    Some(next) => next,
                    None => break,
                };
            }
            Ok(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(field: Field, text: &str) -> FieldForm {
        ClassifiedField::classify(field, text).unwrap().form
    }

    #[test]
    fn test_form_kinds_are_tried_in_order() {
        let kinds: Vec<String> = FormKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(kinds, ["all", "specific", "range", "list", "step"]);
    }

    #[rstest]
    #[case(Field::Minute, "*", FieldForm::All)]
    #[case(Field::Minute, "45", FieldForm::Specific(45))]
    #[case(Field::Hour, "09", FieldForm::Specific(9))]
    #[case(Field::DayOfWeek, "0", FieldForm::Specific(0))]
    #[case(Field::Minute, "10-20", FieldForm::Range { start: 10, end: 20 })]
    #[case(Field::Hour, "20-3", FieldForm::Range { start: 20, end: 3 })]
    #[case(Field::DayOfMonth, "1,15,30", FieldForm::List(vec![1, 15, 30]))]
    #[case(Field::Month, "3,3,1", FieldForm::List(vec![3, 3, 1]))]
    #[case(Field::Minute, "*/15", FieldForm::Step { start: None, increment: 15 })]
    #[case(Field::Minute, "5/15", FieldForm::Step { start: Some(5), increment: 15 })]
    #[case(Field::DayOfWeek, "*/2", FieldForm::Step { start: None, increment: 2 })]
    fn test_classify(#[case] field: Field, #[case] text: &str, #[case] expected: FieldForm) {
        assert_eq!(classify(field, text), expected);
    }

    #[rstest]
    #[case(Field::Minute, "60")]
    #[case(Field::Minute, "")]
    #[case(Field::Minute, "**")]
    #[case(Field::Minute, "1-")]
    #[case(Field::Minute, "1-2-3")]
    #[case(Field::Minute, "1,")]
    #[case(Field::Minute, ",1")]
    #[case(Field::Minute, "*/0")]
    #[case(Field::Minute, "*/60")]
    #[case(Field::Minute, "1-5/2")]
    #[case(Field::Minute, "1,2-4")]
    #[case(Field::Minute, "?")]
    #[case(Field::Hour, "24")]
    #[case(Field::Hour, "*/24")]
    #[case(Field::DayOfMonth, "0")]
    #[case(Field::DayOfMonth, "*/32")]
    #[case(Field::Month, "13")]
    #[case(Field::Month, "JAN")]
    #[case(Field::DayOfWeek, "7")]
    #[case(Field::DayOfWeek, "*/7")]
    #[case(Field::DayOfWeek, "1-7")]
    fn test_classify_rejects(#[case] field: Field, #[case] text: &str) {
        assert_eq!(
            ClassifiedField::classify(field, text),
            Err(CronError::InvalidExpression(text.to_string()))
        );
    }

    #[test]
    fn test_classified_field_keeps_text() {
        let classified = ClassifiedField::classify(Field::Hour, "01-05").unwrap();
        assert_eq!(classified.field, Field::Hour);
        assert_eq!(classified.text, "01-05");
        assert_eq!(classified.form.kind(), FormKind::Range);
        assert!(classified.form.is_range());
    }

    #[rstest]
    #[case(FieldForm::All, 60, 0, (0..60).collect())]
    #[case(FieldForm::All, 32, 1, (1..32).collect())]
    #[case(FieldForm::All, 8, 1, vec![1, 2, 3, 4, 5, 6, 7])]
    #[case(FieldForm::Specific(7), 24, 0, vec![7])]
    #[case(FieldForm::Range { start: 1, end: 5 }, 8, 1, vec![1, 2, 3, 4, 5])]
    #[case(FieldForm::Range { start: 4, end: 4 }, 60, 0, vec![4])]
    #[case(FieldForm::List(vec![30, 1, 15, 1]), 32, 1, vec![30, 1, 15, 1])]
    #[case(FieldForm::Step { start: Some(5), increment: 15 }, 60, 0, vec![5, 20, 35, 50])]
    #[case(FieldForm::Step { start: None, increment: 15 }, 60, 0, vec![0, 15, 30, 45])]
    #[case(FieldForm::Step { start: None, increment: 10 }, 32, 1, vec![0, 10, 20, 30])]
    #[case(FieldForm::Step { start: Some(50), increment: 59 }, 60, 0, vec![50])]
    fn test_expand(
        #[case] form: FieldForm,
        #[case] limit: u8,
        #[case] start: u8,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(expand(&form, limit, start, StepOrigin::Zero).unwrap(), expected);
    }

    #[test]
    fn test_expand_range_out_of_order() {
        let form = FieldForm::Range { start: 20, end: 3 };
        assert_eq!(
            expand(&form, 24, 0, StepOrigin::Zero),
            Err(CronError::RangeOrder { start: 20, end: 3 })
        );
    }

    #[test]
    fn test_expand_step_from_field_start() {
        let form = FieldForm::Step {
            start: None,
            increment: 10,
        };
        assert_eq!(
            expand(&form, 32, 1, StepOrigin::FieldStart).unwrap(),
            vec![1, 11, 21, 31]
        );
        // An explicit start is never moved
        let form = FieldForm::Step {
            start: Some(2),
            increment: 10,
        };
        assert_eq!(
            expand(&form, 32, 1, StepOrigin::FieldStart).unwrap(),
            vec![2, 12, 22]
        );
    }

    #[test]
    fn test_expand_zero_increment() {
        let form = FieldForm::Step {
            start: Some(3),
            increment: 0,
        };
        assert_eq!(
            expand(&form, 60, 0, StepOrigin::Zero),
            Err(CronError::InvalidExpression("3/0".to_string()))
        );
    }

    #[test]
    fn test_classified_field_expand_uses_field_domain() {
        let classified = ClassifiedField::classify(Field::DayOfWeek, "*").unwrap();
        assert_eq!(
            classified.expand(StepOrigin::Zero).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7]
        );
        let classified = ClassifiedField::classify(Field::Month, "*").unwrap();
        assert_eq!(
            classified.expand(StepOrigin::Zero).unwrap(),
            (1..=12).collect::<Vec<u8>>()
        );
    }

    #[rstest]
    #[case(FieldForm::All, "*")]
    #[case(FieldForm::Specific(5), "5")]
    #[case(FieldForm::Range { start: 1, end: 5 }, "1-5")]
    #[case(FieldForm::List(vec![1, 15]), "1,15")]
    #[case(FieldForm::Step { start: None, increment: 15 }, "*/15")]
    #[case(FieldForm::Step { start: Some(5), increment: 15 }, "5/15")]
    fn test_display(#[case] form: FieldForm, #[case] expected: &str) {
        assert_eq!(form.to_string(), expected);
    }
}
