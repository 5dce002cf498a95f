//! Employees: the HR roster used for sign-in and access scoping, and the
//! HR records collection browsed and edited on the HR screens.

pub mod fields;
pub mod hr_view;
pub mod roster;
pub mod update;

pub use fields::EmployeeField;
pub use roster::Employee;
