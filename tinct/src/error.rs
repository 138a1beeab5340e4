//! The common error type for tinct operations.

use std::fmt;

/// An error that can occur while building a gradient brush.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The gradient cannot produce a renderable brush.
    InvalidGradient(InvalidGradient),
    /// A color stop was added to an object that is not a gradient.
    TypeMismatch,
    /// The backend has no primitive for the requested brush.
    NotSupported,
    BackendError(Box<dyn std::error::Error>),
}

/// Why a gradient was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidGradient {
    /// A linear gradient was built without any color stops.
    NoStops,
    /// The outer circle of a radial gradient has zero radius.
    ZeroOuterRadius,
    /// The outer radius of a radial gradient is negative or not finite.
    BadOuterRadius(f64),
}

/// Create a new error of the given kind.
pub fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// If this is an invalid gradient error, the reason.
    pub fn invalid_gradient(&self) -> Option<InvalidGradient> {
        match *self.0 {
            ErrorKind::InvalidGradient(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::InvalidGradient(ref reason) => write!(f, "Invalid gradient: {}", reason),
            ErrorKind::TypeMismatch => write!(f, "Object is not a gradient"),
            ErrorKind::NotSupported => write!(f, "Option not supported"),
            ErrorKind::BackendError(ref e) => write!(f, "Backend error: {}", e),
        }
    }
}

impl fmt::Display for InvalidGradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvalidGradient::NoStops => write!(f, "no color stops"),
            InvalidGradient::ZeroOuterRadius => write!(f, "outer radius is zero"),
            InvalidGradient::BadOuterRadius(r) => write!(f, "outer radius {} is unusable", r),
        }
    }
}

impl std::error::Error for Error {}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        new_error(ErrorKind::BackendError(e))
    }
}

impl From<InvalidGradient> for Error {
    fn from(reason: InvalidGradient) -> Error {
        new_error(ErrorKind::InvalidGradient(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e: Error = InvalidGradient::NoStops.into();
        assert_eq!(e.to_string(), "Invalid gradient: no color stops");
        assert_eq!(e.invalid_gradient(), Some(InvalidGradient::NoStops));
        assert!(new_error(ErrorKind::TypeMismatch).invalid_gradient().is_none());
    }

    #[test]
    fn backend_errors_are_wrapped() {
        let inner: Box<dyn std::error::Error> = "native failure".into();
        let e: Error = inner.into();
        assert!(matches!(e.kind(), ErrorKind::BackendError(_)));
        assert_eq!(e.to_string(), "Backend error: native failure");
    }
}
