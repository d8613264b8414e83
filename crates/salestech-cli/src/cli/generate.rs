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

//! Arguments of `salestech generate`.

use crate::error::Result;
use chrono::NaiveDate;
use clap::Args;
use salestech_core::{defaults, DatasetCounts, GeneratorConfig, ReferenceMode};
use std::path::PathBuf;

/// Flags of the `generate` command.
///
/// [`Default`] matches the clap defaults, so a bare `salestech` invocation
/// behaves exactly like `salestech generate`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Output directory (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Number of sales users
    #[arg(long, value_name = "N", default_value_t = defaults::USERS)]
    pub users: usize,

    /// Number of leads
    #[arg(long, value_name = "N", default_value_t = defaults::LEADS)]
    pub leads: usize,

    /// Number of opportunities (deals)
    #[arg(long, value_name = "N", default_value_t = defaults::OPPORTUNITIES)]
    pub opportunities: usize,

    /// Number of activities
    #[arg(long, value_name = "N", default_value_t = defaults::ACTIVITIES)]
    pub activities: usize,

    /// Number of sales targets
    #[arg(long, value_name = "N", default_value_t = defaults::TARGETS)]
    pub targets: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Reference date for relative dates, YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Output format (json, yaml, csv)
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Foreign key ranges: consistent (match generated counts) or fixed
    /// (20 users, 100 leads, 150 deals)
    #[arg(long, value_name = "MODE", default_value = "consistent")]
    pub references: String,

    /// Validate the dataset before writing it
    #[arg(long)]
    pub verify: bool,

    /// Fail verification on warnings too (implies --verify)
    #[arg(long)]
    pub strict: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            users: defaults::USERS,
            leads: defaults::LEADS,
            opportunities: defaults::OPPORTUNITIES,
            activities: defaults::ACTIVITIES,
            targets: defaults::TARGETS,
            seed: None,
            as_of: None,
            format: "json".to_string(),
            references: "consistent".to_string(),
            verify: false,
            strict: false,
        }
    }
}

impl GenerateArgs {
    /// Generator configuration described by these flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `--references` is not a known mode.
    pub fn config(&self) -> Result<GeneratorConfig> {
        let references: ReferenceMode = self.references.parse()?;
        let counts = DatasetCounts {
            users: self.users,
            leads: self.leads,
            opportunities: self.opportunities,
            activities: self.activities,
            targets: self.targets,
        };

        let mut config = GeneratorConfig::new()
            .with_counts(counts)
            .with_reference_mode(references);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(as_of) = self.as_of {
            config = config.with_as_of(as_of);
        }
        Ok(config)
    }
}
