use serde::{Deserialize, Serialize};
use std::fmt;

/// A single (fraction, label) entry of an allocation method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Share {
    /// Portion of the salary assigned to this category, in `(0, 1]`
    pub fraction: f64,
    /// Human-readable category name
    pub label: String,
}

impl Share {
    /// Creates a new share.
    #[must_use]
    pub fn new(fraction: f64, label: impl Into<String>) -> Self {
        Self { fraction, label: label.into() }
    }
}

/// A named rule for splitting a salary into fractional categories.
///
/// The fractions of `shares` are expected to sum to `1.0`; the calculator's
/// catalog rejects methods that do not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationMethod {
    /// Stable identifier used for lookup and selection (e.g. `"50/30/20"`)
    pub id: String,
    /// Display label (e.g. `"Règle 50/30/20"`)
    pub name: String,
    /// Ordered categories of the method
    pub shares: Vec<Share>,
}

impl AllocationMethod {
    /// Creates a new method from its id, display name and shares.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, shares: Vec<Share>) -> Self {
        Self { id: id.into(), name: name.into(), shares }
    }

    /// Sum of the fractions of every share.
    #[must_use]
    pub fn fraction_sum(&self) -> f64 {
        self.shares.iter().map(|share| share.fraction).sum()
    }
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// The amount assigned to one category of a method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    /// `salary * fraction`, unrounded
    pub amount: f64,
    /// Label copied from the originating share
    pub label: String,
}

/// Ordered per-category split of a salary under one method.
///
/// Entries follow the order of the method's shares exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationResult {
    /// Id of the method the result was computed with
    pub method_id: String,
    /// Salary the result was computed from
    pub salary: f64,
    /// One entry per share of the method
    pub allocations: Vec<Allocation>,
}

impl AllocationResult {
    /// Number of allocated categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns `true` when the result holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Iterates over the allocations in share order.
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.allocations.iter()
    }

    /// Sum of every allocated amount.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.allocations.iter().map(|allocation| allocation.amount).sum()
    }
}

impl<'a> IntoIterator for &'a AllocationResult {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.allocations.iter()
    }
}
