#![deny(warnings)]
//! The allocation engine for the salary split calculator.
//!
//! This crate owns the immutable [`Catalog`] of budgeting methods and the
//! pure [`calculate`] function that splits a salary across a method's shares.
//! [`AllocationSession`] carries the caller-side state (current salary,
//! selected method, last result) between calculations.

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod session;

pub use calculator::{Calculator, calculate, is_valid_salary, parse_salary};
pub use catalog::{Catalog, FRACTION_SUM_TOLERANCE, validate_method};
pub use error::CatalogError;
pub use session::AllocationSession;
pub use split_types::{Allocation, AllocationMethod, AllocationResult, Share};
