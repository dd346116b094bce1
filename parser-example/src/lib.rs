//! 示例共享代码：基于 `Parser` 游标手写的计算器。

pub mod calc;

pub use calc::{evaluate, parse, CalcError, Expr};
