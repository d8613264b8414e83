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

//! Validate command - consistency checks over written datasets

use super::check_report;
use crate::error::Result;
use colored::Colorize;
use salestech_core::{read_dataset, validate_dataset, DatasetKind, OutputFormat};
use std::path::Path;

/// Validate the five dataset files in `dir`.
///
/// # Errors
///
/// Returns `Err` if a file cannot be read or decoded, if validation finds
/// errors, or in strict mode if it finds warnings.
///
/// # Output
///
/// Prints a ✓ or ✗ status line for the directory and the per-dataset counts,
/// followed by one line per issue found.
pub fn validate(dir: &Path, format: OutputFormat, strict: bool) -> Result<()> {
    let dataset = read_dataset(dir, format)?;
    let report = validate_dataset(&dataset);

    if report.is_clean(strict) {
        println!("{} {}", "✓".green().bold(), dir.display());
    } else {
        println!("{} {}", "✗".red().bold(), dir.display());
    }

    for kind in DatasetKind::all() {
        println!("  {}: {}", kind, dataset.len_of(*kind));
    }
    if strict {
        println!("  Mode: strict (all references must resolve)");
    }

    check_report(&report, strict)
}
