use std::rc::Rc;

/// One program statement. Each variant owns its expression trees,
/// so replacing or deleting a stored line drops the whole tree.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Let(Rc<str>, Expression),
    Print(Expression),
    Input(Rc<str>),
    Rem(String),
    Goto(u32),
    If(Expression, Relation, Expression, u32),
    End,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Less,
    Equal,
    Greater,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(i32),
    Var(Rc<str>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

/// Commands are only recognized in direct mode and are never stored.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Run,
    List,
    Clear,
    Quit,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Less => write!(f, "<"),
            Equal => write!(f, "="),
            Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Var(name) => write!(f, "{}", name),
            Multiply(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Divide(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Subtract(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Let(var, expr) => write!(f, "LET {} = {}", var, expr),
            Print(expr) => write!(f, "PRINT {}", expr),
            Input(var) => write!(f, "INPUT {}", var),
            Rem(text) => write!(f, "REM{}", text),
            Goto(line) => write!(f, "GOTO {}", line),
            If(lhs, rel, rhs, line) => write!(f, "IF {} {} {} THEN {}", lhs, rel, rhs, line),
            End => write!(f, "END"),
        }
    }
}
