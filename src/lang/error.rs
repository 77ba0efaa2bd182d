#[derive(Clone)]
pub struct Error {
    code: ErrorCode,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error { code, message: "" }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Errors the session driver should not survive.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::ExecutionLimit
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::UndefinedVariable | ErrorCode::DivisionByZero | ErrorCode::Overflow
        )
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError,
    LineNumberError,
    UndefinedVariable,
    DivisionByZero,
    Overflow,
    ExecutionLimit,
    Break,
    DirectStatementInFile,
    LineBufferOverflow,
}

impl ErrorCode {
    fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            LineNumberError => "LINE NUMBER ERROR",
            UndefinedVariable => "VARIABLE NOT DEFINED",
            DivisionByZero => "DIVIDE BY ZERO",
            Overflow => "OVERFLOW",
            ExecutionLimit => "EXECUTION LIMIT EXCEEDED",
            Break => "BREAK",
            DirectStatementInFile => "DIRECT STATEMENT IN FILE",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        self.code == other.code
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "Error {{ {} }}", self.code.as_str())
        } else {
            write!(f, "Error {{ {}; {} }}", self.code.as_str(), self.message)
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_plain() {
        let e = error!(SyntaxError; "EXPECTED EXPRESSION");
        assert_eq!(e.to_string(), "SYNTAX ERROR");
        assert_eq!(format!("{:?}", e), "Error { SYNTAX ERROR; EXPECTED EXPRESSION }");
        assert_eq!(error!(LineNumberError).to_string(), "LINE NUMBER ERROR");
    }

    #[test]
    fn test_classification() {
        assert!(error!(DivisionByZero).is_evaluation());
        assert!(error!(UndefinedVariable).is_evaluation());
        assert!(!error!(SyntaxError).is_evaluation());
        assert!(error!(ExecutionLimit).is_fatal());
        assert!(!error!(Break).is_fatal());
    }
}
