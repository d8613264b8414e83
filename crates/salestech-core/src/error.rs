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

//! Error types for dataset generation and serialization.
//!
//! Every fallible operation in this crate returns [`Result<T>`], an alias over
//! [`DataError`]. Variants carry enough context (dataset name, path, format)
//! to produce a useful message without a backtrace.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of records per dataset (10 million).
///
/// Guards against runaway allocations from mistyped counts.
pub const MAX_RECORDS_PER_DATASET: usize = 10_000_000;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while generating, writing or reading datasets.
///
/// # Examples
///
/// ```
/// use salestech_core::DataError;
///
/// let err = DataError::DatasetTooLarge {
///     dataset: "leads",
///     requested: 20_000_000,
///     max: 10_000_000,
/// };
/// assert!(err.to_string().contains("leads"));
/// ```
#[derive(Debug, Error)]
pub enum DataError {
    /// Requested record count exceeds [`MAX_RECORDS_PER_DATASET`].
    #[error("Dataset '{dataset}' size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Dataset name
        dataset: &'static str,
        /// Requested count
        requested: usize,
        /// Maximum allowed count
        max: usize,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// File system operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Records could not be encoded.
    #[error("Failed to write {dataset} as {format}: {message}")]
    Serialize {
        /// Dataset name
        dataset: &'static str,
        /// Output format name
        format: &'static str,
        /// Encoder message
        message: String,
    },

    /// A dataset file could not be decoded.
    #[error("Failed to read '{path}': {message}")]
    Deserialize {
        /// The file being decoded
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// A `YYYY-MM` period string could not be parsed.
    #[error("Invalid time period '{0}': expected YYYY-MM")]
    InvalidTimePeriod(String),

    /// Unsupported output format name.
    #[error("Unknown format '{0}' (expected json, yaml or csv)")]
    UnknownFormat(String),

    /// Unsupported reference mode name.
    #[error("Unknown reference mode '{0}' (expected consistent or fixed)")]
    UnknownReferenceMode(String),
}

impl DataError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Validate that a requested record count is within acceptable limits.
///
/// # Examples
///
/// ```
/// use salestech_core::error::{validate_record_count, MAX_RECORDS_PER_DATASET};
///
/// assert!(validate_record_count("users", 1000).is_ok());
/// assert!(validate_record_count("users", MAX_RECORDS_PER_DATASET + 1).is_err());
/// ```
#[inline]
pub fn validate_record_count(dataset: &'static str, count: usize) -> Result<()> {
    if count > MAX_RECORDS_PER_DATASET {
        return Err(DataError::DatasetTooLarge {
            dataset,
            requested: count,
            max: MAX_RECORDS_PER_DATASET,
        });
    }
    Ok(())
}
