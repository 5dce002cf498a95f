//! Orders ("F3" sheet rows): field catalog, filter pipeline, option
//! derivation, de-duplicated totals, table columns and the product catalog.

pub mod aggregate;
pub mod catalog;
pub mod columns;
pub mod fields;
pub mod filter;
pub mod options;

pub use aggregate::{aggregate, OrderTotals};
pub use fields::OrderField;
pub use filter::{CategoricalFilter, OrderFilter};
