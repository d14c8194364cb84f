use std::fmt::{Debug, Display};

/// Every way a run can fail. All of them are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArgument,
    InvalidArgument,
    FileOpenFailure,
    UnknownFormat,
    DecodeFailure,
    EncodeFailure,
}

pub struct FilterError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FilterError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for FilterError {}

#[macro_export]
macro_rules! filter_err {
    ($kind:ident, $($msg:tt)+) => {
        $crate::error::FilterError::new(
            $crate::error::ErrorKind::$kind,
            format!(
                "img-filter: {} @ {}:{}:{}",
                format_args!($($msg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! filter_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::filter_err!($kind, "{}", err));
            }
        }
    };
}
