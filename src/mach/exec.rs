use super::{Listing, Var};
use crate::error;
use crate::lang::ast::{Relation, Statement};
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What a statement asks of whoever is driving it.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Fall through to the following line.
    Next,
    /// Fall through after writing this text.
    Print(String),
    /// Suspend until a value for this variable arrives.
    Input(Rc<str>),
    /// Continue at this line.
    Jump(u32),
    /// Stop the program.
    Halt,
}

impl Statement {
    pub fn execute(&self, var: &mut Var, listing: &Listing) -> Result<Flow> {
        use Statement::*;
        match self {
            Let(name, expr) => {
                let value = expr.eval(var)?;
                var.store(name, value);
                Ok(Flow::Next)
            }
            Print(expr) => Ok(Flow::Print(format!("{}\n", expr.eval(var)?))),
            Input(name) => Ok(Flow::Input(name.clone())),
            Rem(_) => Ok(Flow::Next),
            Goto(target) => {
                Self::check_target(*target, listing)?;
                Ok(Flow::Jump(*target))
            }
            If(_, _, _, target) => {
                Self::check_target(*target, listing)?;
                if self.is_condition_true(var)? {
                    Ok(Flow::Jump(*target))
                } else {
                    Ok(Flow::Next)
                }
            }
            End => Ok(Flow::Halt),
        }
    }

    /// Only meaningful for `IF`; every other statement is never true.
    pub fn is_condition_true(&self, var: &Var) -> Result<bool> {
        match self {
            Statement::If(lhs, relation, rhs, _) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                Ok(match relation {
                    Relation::Less => lhs < rhs,
                    Relation::Equal => lhs == rhs,
                    Relation::Greater => lhs > rhs,
                })
            }
            _ => Ok(false),
        }
    }

    fn check_target(target: u32, listing: &Listing) -> Result<()> {
        if listing.contains(target) {
            Ok(())
        } else {
            Err(error!(LineNumberError))
        }
    }
}

/// Parses a response to `INPUT`: leading blanks, then one optionally
/// signed integer that ends the line.
pub fn input_value(s: &str) -> Option<i32> {
    s.trim_start().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Line};

    fn statement(s: &str) -> Statement {
        Line::new(s).ast().unwrap()
    }

    #[test]
    fn test_let_and_print() {
        let mut var = Var::new();
        let listing = Listing::default();
        assert_eq!(
            statement("LET X = 6 * 7").execute(&mut var, &listing),
            Ok(Flow::Next)
        );
        assert_eq!(var.fetch("X"), Ok(42));
        assert_eq!(
            statement("PRINT X - 50").execute(&mut var, &listing),
            Ok(Flow::Print("-8\n".to_string()))
        );
    }

    #[test]
    fn test_failed_let_does_not_assign() {
        let mut var = Var::new();
        let listing = Listing::default();
        let e = statement("LET X = 1 / 0")
            .execute(&mut var, &listing)
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
        assert!(var.fetch("X").is_err());
    }

    #[test]
    fn test_goto_checks_target() {
        let mut var = Var::new();
        let mut listing = Listing::default();
        let goto = statement("GOTO 20");
        let e = goto.execute(&mut var, &listing).unwrap_err();
        assert_eq!(e.code(), ErrorCode::LineNumberError);
        listing.insert(Line::new("20 END")).unwrap();
        assert_eq!(goto.execute(&mut var, &listing), Ok(Flow::Jump(20)));
    }

    #[test]
    fn test_if() {
        let mut var = Var::new();
        let mut listing = Listing::default();
        listing.insert(Line::new("30 END")).unwrap();
        var.store(&"N".into(), 3);
        let less = statement("IF N < 4 THEN 30");
        let equal = statement("IF N = 4 THEN 30");
        let greater = statement("IF N + 2 > 4 THEN 30");
        assert_eq!(less.is_condition_true(&var), Ok(true));
        assert_eq!(equal.is_condition_true(&var), Ok(false));
        assert_eq!(greater.is_condition_true(&var), Ok(true));
        assert_eq!(less.execute(&mut var, &listing), Ok(Flow::Jump(30)));
        assert_eq!(equal.execute(&mut var, &listing), Ok(Flow::Next));
        let missing = statement("IF 1 < 2 THEN 40");
        assert!(missing.execute(&mut var, &listing).is_err());
    }

    #[test]
    fn test_input_rem_end() {
        let mut var = Var::new();
        let listing = Listing::default();
        assert_eq!(
            statement("INPUT A").execute(&mut var, &listing),
            Ok(Flow::Input("A".into()))
        );
        assert_eq!(
            statement("REM PRINT 1/0").execute(&mut var, &listing),
            Ok(Flow::Next)
        );
        assert_eq!(statement("END").execute(&mut var, &listing), Ok(Flow::Halt));
    }

    #[test]
    fn test_input_value() {
        assert_eq!(input_value("42"), Some(42));
        assert_eq!(input_value("  -7"), Some(-7));
        assert_eq!(input_value("-7 "), None);
        assert_eq!(input_value("12\t"), None);
        assert_eq!(input_value("-2147483648"), Some(i32::MIN));
        assert_eq!(input_value("+3"), Some(3));
        assert_eq!(input_value("3x"), None);
        assert_eq!(input_value("1 2"), None);
        assert_eq!(input_value(""), None);
        assert_eq!(input_value("4.5"), None);
    }
}
