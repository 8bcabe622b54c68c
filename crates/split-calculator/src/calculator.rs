//! Salary split calculation
//!
//! result[i] = (salary * shares[i].fraction, shares[i].label)
//!
//! A salary that is not a positive finite number produces no result at all.
//! Callers keep whatever they displayed before; nothing is reported as an error.

use split_types::{Allocation, AllocationMethod, AllocationResult};
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// Returns `true` when `salary` can be split: finite and strictly positive.
pub fn is_valid_salary(salary: f64) -> bool {
    salary.is_finite() && salary > 0.0
}

/// Parses raw salary input.
///
/// Blank input and text that is not a number both yield `None`. Positivity is
/// not checked here; that is the precondition of [`calculate`].
pub fn parse_salary(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Splits `salary` across the shares of `method`, preserving share order.
///
/// Returns `None` without computing anything when the salary is invalid.
pub fn calculate(salary: f64, method: &AllocationMethod) -> Option<AllocationResult> {
    if !is_valid_salary(salary) {
        return None;
    }

    let allocations = method
        .shares
        .iter()
        .map(|share| Allocation { amount: salary * share.fraction, label: share.label.clone() })
        .collect();

    Some(AllocationResult { method_id: method.id.clone(), salary, allocations })
}

/// Calculator bound to a catalog, resolving methods by id.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    catalog: &'a Catalog,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> Calculator<'a> {
    /// Creates a calculator resolving method ids against `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves `method_id` (falling back to the catalog default) and calculates.
    pub fn calculate_by_id(&self, salary: f64, method_id: &str) -> Option<AllocationResult> {
        let method = match self.catalog.get(method_id) {
            Some(method) => method,
            None => {
                let fallback = self.catalog.default_method();
                warn!(
                    requested = method_id,
                    fallback = %fallback.id,
                    "unknown allocation method, using default"
                );
                fallback
            }
        };

        let result = calculate(salary, method);
        match &result {
            Some(result) => debug!(method = %method.id, categories = result.len(), "salary split computed"),
            None => debug!(salary, "salary is not a positive number, skipping calculation"),
        }
        result
    }
}
