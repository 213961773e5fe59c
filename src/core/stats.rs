//! Salary summary statistics

use serde::{Deserialize, Serialize};

/// Running count, sum, min and max of a set of salaries
///
/// The empty accumulator has `min = +inf` and `max = -inf` so that the first
/// accepted value replaces both. Min and max follow `f64::total_cmp`, the
/// same order used to pick the best-paid member, so a NaN salary wins `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryStats {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for SalaryStats {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl SalaryStats {
    /// Fold one salary into the statistics
    pub fn accept(&mut self, salary: f64) {
        self.count += 1;
        self.sum += salary;
        self.min = lesser(self.min, salary);
        self.max = greater(self.max, salary);
    }

    /// Merge another accumulator into this one
    pub fn combine(&mut self, other: &SalaryStats) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = lesser(self.min, other.min);
        self.max = greater(self.max, other.max);
    }

    /// Arithmetic mean, or 0.0 when nothing was accepted
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn lesser(a: f64, b: f64) -> f64 {
    if b.total_cmp(&a).is_lt() { b } else { a }
}

fn greater(a: f64, b: f64) -> f64 {
    if b.total_cmp(&a).is_gt() { b } else { a }
}

impl Extend<f64> for SalaryStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for salary in iter {
            self.accept(salary);
        }
    }
}

impl FromIterator<f64> for SalaryStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::default();
        stats.extend(iter);
        stats
    }
}
