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

//! CLI command implementations

mod generate;
mod validate;

pub use generate::generate;
pub use validate::validate;

use crate::error::{CliError, Result};
use colored::Colorize;
use salestech_core::{Severity, ValidationReport};

/// Prints every issue of a report, one per line, and turns an unclean report
/// into [`CliError::ValidationFailed`].
fn check_report(report: &ValidationReport, strict: bool) -> Result<()> {
    for issue in &report.issues {
        let marker = match issue.severity {
            Severity::Error => "✗".red().bold(),
            Severity::Warning => "!".yellow().bold(),
        };
        println!("  {} {}", marker, issue);
    }

    if report.is_clean(strict) {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            errors: report.error_count(),
            warnings: report.warning_count(),
        })
    }
}
