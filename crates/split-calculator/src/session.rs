//! Caller-owned calculation state.
//!
//! Holds the current salary input, the selected method and the last computed
//! result. Submitting an invalid salary leaves the previous result in place.

use split_types::{AllocationMethod, AllocationResult};

use crate::calculator::calculate;
use crate::catalog::Catalog;

/// Salary input, selected method and last result of one caller.
#[derive(Debug, Clone)]
pub struct AllocationSession<'a> {
    catalog: &'a Catalog,
    salary: Option<f64>,
    method: &'a AllocationMethod,
    result: Option<AllocationResult>,
}

impl<'a> AllocationSession<'a> {
    /// Starts with no salary, the catalog's first method and no result.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog, salary: None, method: catalog.default_method(), result: None }
    }

    /// Replaces the salary input; takes effect on the next [`submit`](Self::submit).
    pub fn set_salary(&mut self, salary: Option<f64>) {
        self.salary = salary;
    }

    /// Selects a method by id; unknown ids select the catalog's first method.
    pub fn select_method(&mut self, id: &str) -> &'a AllocationMethod {
        self.method = self.catalog.find_method(id);
        self.method
    }

    /// Recomputes the result from the current salary and method.
    ///
    /// Returns `true` when a new result replaced the previous one.
    pub fn submit(&mut self) -> bool {
        match self.salary.and_then(|salary| calculate(salary, self.method)) {
            Some(result) => {
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    /// Current salary input, if any.
    pub fn salary(&self) -> Option<f64> {
        self.salary
    }

    /// Currently selected method.
    pub fn method(&self) -> &'a AllocationMethod {
        self.method
    }

    /// Last successfully computed result.
    pub fn result(&self) -> Option<&AllocationResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_result() {
        let session = AllocationSession::new(Catalog::builtin());
        assert_eq!(session.salary(), None);
        assert_eq!(session.method().id, "50/30/20");
        assert!(session.result().is_none());
    }

    #[test]
    fn submit_without_salary_is_a_no_op() {
        let mut session = AllocationSession::new(Catalog::builtin());
        assert!(!session.submit());
        assert!(session.result().is_none());
    }

    #[test]
    fn invalid_salary_keeps_previous_result() {
        let mut session = AllocationSession::new(Catalog::builtin());
        session.select_method("80/20");
        session.set_salary(Some(1000.0));
        assert!(session.submit());
        let before = session.result().cloned();

        session.set_salary(Some(-5.0));
        assert!(!session.submit());
        assert_eq!(session.result().cloned(), before);

        session.set_salary(Some(f64::NAN));
        assert!(!session.submit());
        assert_eq!(session.result().cloned(), before);
    }

    #[test]
    fn changing_method_does_not_recompute_until_submit() {
        let mut session = AllocationSession::new(Catalog::builtin());
        session.set_salary(Some(1000.0));
        session.submit();

        session.select_method("Jars");
        assert_eq!(session.result().map(|r| r.method_id.as_str()), Some("50/30/20"));

        session.submit();
        assert_eq!(session.result().map(|r| r.len()), Some(6));
    }

    #[test]
    fn unknown_method_selects_default() {
        let mut session = AllocationSession::new(Catalog::builtin());
        session.select_method("Jars");
        let method = session.select_method("nope");
        assert_eq!(method.name, "Règle 50/30/20");
    }
}
