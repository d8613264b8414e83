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

//! Generate command - build and write all five datasets

use super::check_report;
use crate::error::Result;
use colored::Colorize;
use salestech_core::{
    validate_dataset, DatasetBuilder, DatasetWriter, GeneratorConfig, OutputFormat,
};
use std::path::Path;
use tracing::debug;

/// Generate the datasets described by `config` and write them to `output`.
///
/// # Arguments
///
/// * `config` - Counts, seed, reference date and reference mode
/// * `output` - Directory for the five files (created if missing)
/// * `format` - Output format
/// * `verify` - Validate before writing; nothing is written if validation fails
/// * `strict` - Fail verification on warnings too (implies `verify`)
///
/// # Errors
///
/// Returns `Err` if:
/// - The configuration is invalid
/// - Verification fails
/// - A file cannot be written
///
/// # Output
///
/// Prints one `Generated {n} {dataset} records` line per dataset to stdout,
/// then a completion line naming the directory and format.
pub fn generate(
    config: GeneratorConfig,
    output: &Path,
    format: OutputFormat,
    verify: bool,
    strict: bool,
) -> Result<()> {
    let dataset = DatasetBuilder::new(config).build()?;

    if verify || strict {
        let report = validate_dataset(&dataset);
        check_report(&report, strict)?;
        println!(
            "{} Verified {} records ({} warnings)",
            "✓".green().bold(),
            dataset.counts().total(),
            report.warning_count()
        );
    }

    let writer = DatasetWriter::new(output, format);
    debug!("Writing {} output to {}", writer.format(), writer.dir().display());
    for summary in writer.write(&dataset)? {
        println!("{}", summary);
    }
    println!(
        "{} All datasets generated successfully ({} in {})",
        "✓".green().bold(),
        writer.format(),
        writer.dir().display()
    );
    Ok(())
}
