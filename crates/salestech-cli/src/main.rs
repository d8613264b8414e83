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

//! SalesTech Command Line Interface

use clap::Parser;
use salestech_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SalesTech - synthetic sales CRM data generator
///
/// Generates users, leads, opportunities, activities and targets for a
/// fictitious sales organisation and writes one file per dataset.
///
/// # Examples
///
/// ```bash
/// # Default datasets as JSON in the current directory
/// salestech
///
/// # Reproducible YAML output
/// salestech generate --seed 42 --format yaml --output data
///
/// # Check a generated directory
/// salestech validate data --format yaml --strict
/// ```
#[derive(Parser)]
#[command(name = "salestech")]
#[command(author, version, long_about = None)]
#[command(about = "SalesTech - synthetic sales CRM data generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
