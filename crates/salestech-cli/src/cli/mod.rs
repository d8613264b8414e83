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

//! CLI command definitions and argument parsing.
//!
//! - [`generate`]: `GenerateArgs`, the flags of `salestech generate`
//! - `validate` takes a directory, a format and `--strict`, inline below
//!
//! String flags (`--format`, `--references`) are parsed with `FromStr` when
//! the command runs, so unknown values surface as typed errors.

mod generate;

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

pub use generate::GenerateArgs;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use salestech_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Option<Commands>,
/// }
///
/// let cli = Cli::parse();
/// cli.command.unwrap_or_default().execute().unwrap();
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate synthetic CRM datasets
    ///
    /// Writes users, leads, opportunities, activities and targets to one file
    /// each in the output directory.
    Generate(GenerateArgs),

    /// Validate previously generated datasets
    ///
    /// Reads the five dataset files from a directory and checks deal stage
    /// rules, activity durations, id sequences and cross-dataset references.
    /// Dangling references are warnings and only fail in strict mode.
    Validate {
        /// Directory containing the dataset files
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Format of the dataset files (json, yaml, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Strict mode (fail on warnings too)
        #[arg(short, long)]
        strict: bool,
    },
}

/// Running without a subcommand generates the default datasets into the
/// current directory.
impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(GenerateArgs::default())
    }
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - A flag value cannot be parsed
    /// - Generation, writing or reading fails
    /// - Validation finds errors (or warnings, in strict mode)
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate(args) => {
                let config = args.config()?;
                let format = args.format.parse()?;
                commands::generate(config, &args.output, format, args.verify, args.strict)
            }
            Commands::Validate {
                dir,
                format,
                strict,
            } => commands::validate(&dir, format.parse()?, strict),
        }
    }
}
