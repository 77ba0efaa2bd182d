use super::{Operation, Var};
use crate::lang::ast::Expression;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Evaluates the tree against `var`. The left operand is always
    /// evaluated before the right one.
    pub fn eval(&self, var: &Var) -> Result<i32> {
        match self {
            Expression::Integer(n) => Ok(*n),
            Expression::Var(name) => var.fetch(name),
            Expression::Multiply(lhs, rhs) => {
                Operation::multiply(lhs.eval(var)?, rhs.eval(var)?)
            }
            Expression::Divide(lhs, rhs) => Operation::divide(lhs.eval(var)?, rhs.eval(var)?),
            Expression::Add(lhs, rhs) => Operation::sum(lhs.eval(var)?, rhs.eval(var)?),
            Expression::Subtract(lhs, rhs) => {
                Operation::subtract(lhs.eval(var)?, rhs.eval(var)?)
            }
        }
    }
}
