//! Success-or-failure result types.

pub mod operation_result;
pub mod result;

pub use operation_result::{OperationResult, ResultOperator};
pub use result::Result;
