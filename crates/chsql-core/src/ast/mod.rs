//! Abstract Syntax Tree (AST) types for query fragments.

mod expression;
mod literal;
mod order;

pub use expression::{AggregateFunc, BinaryOp, Expr};
pub use literal::Literal;
pub use order::{OrderBy, OrderDirection};
