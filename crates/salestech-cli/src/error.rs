// Dweve SalesTech - Synthetic Sales CRM Data
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the SalesTech CLI.
//!
//! All commands return `Result<T, CliError>`; `main` prints the message and
//! exits with a failure status.

use salestech_core::DataError;
use thiserror::Error;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// The main error type for SalesTech CLI operations.
///
/// # Examples
///
/// ```rust
/// use salestech_cli::error::CliError;
///
/// let err = CliError::ValidationFailed { errors: 2, warnings: 0 };
/// assert_eq!(err.to_string(), "Validation failed: 2 error(s), 0 warning(s)");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Generation, serialization or reading failed in the core library.
    #[error(transparent)]
    Data(#[from] DataError),

    /// A dataset did not pass validation.
    ///
    /// Warnings only count when validation runs in strict mode.
    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed {
        /// Number of errors found
        errors: usize,
        /// Number of warnings found
        warnings: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_is_transparent() {
        let err: CliError = DataError::UnknownFormat("xml".to_string()).into();
        assert_eq!(err.to_string(), DataError::UnknownFormat("xml".to_string()).to_string());
        assert!(matches!(err, CliError::Data(DataError::UnknownFormat(_))));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = CliError::ValidationFailed {
            errors: 0,
            warnings: 7,
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: 0 error(s), 7 warning(s)"
        );
    }
}
