pub mod bingo;
pub mod calibration;
pub mod expense_report;
pub mod navigation;
pub mod password_policy;
