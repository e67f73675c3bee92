use super::Location;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    location: Option<Location>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $loc:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_location($loc)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $loc:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_location($loc)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            location: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Attach a source location unless one is already known.
    /// Errors raised deep inside an operation pick up the location
    /// of the instruction that was executing.
    pub fn in_location(self, location: Location) -> Error {
        if self.location.is_some() {
            return self;
        }
        Error {
            location: Some(location),
            ..self
        }
    }

    pub fn message<S: AsRef<str>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.as_ref().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnterminatedString = 1,
    UnknownDirective = 2,
    MalformedToken = 3,
    UnbalancedBlock = 4,
    UndefinedAlias = 5,
    StackUnderflow = 10,
    TypeMismatch = 11,
    UnboundName = 12,
    Overflow = 13,
    DivisionByZero = 14,
    SubscriptOutOfRange = 15,
    OutOfMemory = 16,
    Break = 17,
    FileNotFound = 20,
    IoError = 21,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            UnterminatedString => "UNTERMINATED STRING",
            UnknownDirective => "UNKNOWN DIRECTIVE",
            MalformedToken => "MALFORMED TOKEN",
            UnbalancedBlock => "UNBALANCED BLOCK",
            UndefinedAlias => "UNDEFINED ALIAS",
            StackUnderflow => "STACK UNDERFLOW",
            TypeMismatch => "TYPE MISMATCH",
            UnboundName => "UNBOUND NAME",
            Overflow => "OVERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            OutOfMemory => "OUT OF MEMORY",
            Break => "BREAK",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(location) = self.location {
            suffix.push_str(&format!(" IN {}", location));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let msg = error.to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::new(ErrorCode::FileNotFound).message(msg),
            _ => Error::new(ErrorCode::IoError).message(msg),
        }
    }
}
