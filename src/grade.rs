#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Range-checked grade values.

use std::fmt::Display;

use crate::{
    constants::{RATING_RANGE, SCORE_RANGE},
    error::RecordError,
};

/// A rating given for a subject, from 2 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

/// A test result for a subject, from 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

/// Implements the integer conversions and accessors shared by grade values.
macro_rules! bounded_grade {
    ($grade:ident, $range:expr, $error:ident, [$($int:ty),+]) => {
        impl $grade {
            /// The underlying value.
            pub fn value(self) -> u8 {
                self.0
            }
        }

        $(
            impl TryFrom<$int> for $grade {
                type Error = RecordError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    u8::try_from(value)
                        .ok()
                        .filter(|v| $range.contains(v))
                        .map(Self)
                        .ok_or_else(|| RecordError::$error(value.to_string()))
                }
            }
        )+

        impl From<$grade> for f64 {
            fn from(grade: $grade) -> f64 {
                f64::from(grade.0)
            }
        }

        impl Display for $grade {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_grade!(Rating, RATING_RANGE, InvalidRating, [
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
]);
bounded_grade!(Score, SCORE_RANGE, InvalidScore, [
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
]);

/// Arithmetic mean of `values`, `None` when there are none.
pub(crate) fn mean<T>(values: impl IntoIterator<Item = T>) -> Option<f64>
where
    T: Into<f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v.into(), count + 1));

    (count > 0).then(|| sum / count as f64)
}
