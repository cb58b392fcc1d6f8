//! Validated rating matrices
//!
//! A [`RatingMatrix`] holds the raw ratings of a subjective experiment:
//! one row per test condition, one column per subject. Construction
//! validates every value against the 5-point scale up front, so the
//! estimators downstream never see an out-of-range rating.

use crate::error::{Error, Result};
use crate::scale::is_valid_rating;

/// A k×n matrix of subjective ratings: k test conditions, n subjects.
///
/// Storage is row-major and rectangular; every condition must have been
/// rated by the same panel of subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingMatrix {
    data: Vec<u8>,
    conditions: usize,
    subjects: usize,
}

impl RatingMatrix {
    /// Build a matrix from per-condition rating rows.
    ///
    /// Fails with [`Error::InvalidParameter`] if the input is empty or
    /// ragged, and with [`Error::InvalidRating`] if any value lies
    /// outside `1..=5`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let conditions = rows.len();
        if conditions == 0 {
            return Err(Error::InvalidParameter(
                "Ratings matrix must contain at least one test condition".to_string(),
            ));
        }

        let subjects = rows[0].len();
        if subjects == 0 {
            return Err(Error::empty_row());
        }

        let mut data = Vec::with_capacity(conditions * subjects);
        for (condition, row) in rows.iter().enumerate() {
            if row.len() != subjects {
                return Err(Error::ragged_row(condition, subjects, row.len()));
            }
            for (subject, &value) in row.iter().enumerate() {
                if !is_valid_rating(value) {
                    return Err(Error::InvalidRating {
                        value,
                        condition,
                        subject,
                    });
                }
                data.push(value);
            }
        }

        Ok(Self {
            data,
            conditions,
            subjects,
        })
    }

    /// Build a matrix from a row-major flat buffer.
    pub fn from_flat(data: Vec<u8>, conditions: usize, subjects: usize) -> Result<Self> {
        if conditions == 0 || subjects == 0 {
            return Err(Error::InvalidParameter(
                "Ratings matrix dimensions must be non-zero".to_string(),
            ));
        }
        if data.len() != conditions * subjects {
            return Err(Error::InvalidParameter(format!(
                "Flat buffer of length {} does not match {conditions}x{subjects} matrix",
                data.len()
            )));
        }
        for (i, &value) in data.iter().enumerate() {
            if !is_valid_rating(value) {
                return Err(Error::InvalidRating {
                    value,
                    condition: i / subjects,
                    subject: i % subjects,
                });
            }
        }
        Ok(Self {
            data,
            conditions,
            subjects,
        })
    }

    /// Number of test conditions (rows)
    #[inline]
    pub fn conditions(&self) -> usize {
        self.conditions
    }

    /// Number of subjects (columns)
    #[inline]
    pub fn subjects(&self) -> usize {
        self.subjects
    }

    /// Ratings for one test condition
    #[inline]
    pub fn row(&self, condition: usize) -> &[u8] {
        let start = condition * self.subjects;
        &self.data[start..start + self.subjects]
    }

    /// Iterate over per-condition rating rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.subjects)
    }
}
