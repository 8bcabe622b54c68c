//! Split Types
//!
//! This crate defines the data model shared by the salary split ecosystem
//! (currently `split-calculator` and `split-cli`): allocation methods, their
//! shares, and the per-category amounts a calculation produces. Keeping the
//! types here lets the front end deserialize user-authored methods without
//! pulling in the calculator.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

mod types;
pub use types::{Allocation, AllocationMethod, AllocationResult, Share};
