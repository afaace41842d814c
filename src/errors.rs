use thiserror::Error;

/// Represents errors that can occur while classifying and expanding cron expressions.
///
/// `CronError` is used throughout the `cron_expand` crate and is exported for consuming
/// programs to use. Every variant is recoverable: the caller decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The expression did not contain the five schedule fields and a command.
    ///
    /// This error is raised before any field is looked at.
    #[error("Invalid number of arguments")]
    InvalidArgumentCount,

    /// A field matched none of the forms allowed for it.
    ///
    /// Holds the offending field text after alias and `?` substitution,
    /// such as `60` in the minute position.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// A range field starts after it ends.
    ///
    /// Classification only checks the shape of `A-B`, so this surfaces while expanding.
    #[error("start of range exceeds end of range: {start}-{end}")]
    RangeOrder { start: u8, end: u8 },
}
