// Copyright 2024 Aleo Network Foundation
// This file is part of the polydfs library.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::curves::FieldError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolynomialError {
    #[error("{}: {}", _0, _1)]
    Crate(&'static str, String),

    #[error("Cannot divide by a polynomial whose leading coefficient is not invertible")]
    DivisionByZeroLeadingCoefficient,

    #[error("Cannot shrink the domain to {size} points below the declared degree {degree}")]
    DomainTooSmall { degree: usize, size: usize },

    #[error("{}", _0)]
    FieldError(FieldError),

    #[error("Index {index} is out of range for a domain of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Domain size {} is not a nonzero power of two", _0)]
    InvalidDomainSize(usize),
}

impl From<FieldError> for PolynomialError {
    fn from(error: FieldError) -> Self {
        PolynomialError::FieldError(error)
    }
}

impl From<std::io::Error> for PolynomialError {
    fn from(error: std::io::Error) -> Self {
        PolynomialError::Crate("std::io", format!("{:?}", error))
    }
}

impl From<PolynomialError> for std::io::Error {
    fn from(error: PolynomialError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, format!("{}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_converts_into_polynomial_error() {
        let error: PolynomialError = FieldError::NoRootOfUnity(1 << 40).into();
        assert!(matches!(error, PolynomialError::FieldError(FieldError::NoRootOfUnity(order)) if order == 1 << 40));
        assert_eq!(
            error.to_string(),
            "The field has no primitive root of unity of order 1099511627776"
        );
    }

    #[test]
    fn test_domain_too_small_message() {
        let error = PolynomialError::DomainTooSmall { degree: 9, size: 8 };
        assert_eq!(error.to_string(), "Cannot shrink the domain to 8 points below the declared degree 9");

        let io: std::io::Error = error.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Other);
    }
}
