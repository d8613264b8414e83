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

//! Generator configuration.
//!
//! [`GeneratorConfig`] uses the builder pattern:
//!
//! ```
//! use salestech_core::{DatasetCounts, GeneratorConfig, ReferenceMode};
//!
//! let config = GeneratorConfig::new()
//!     .with_counts(DatasetCounts::uniform(5))
//!     .with_seed(42)
//!     .with_reference_mode(ReferenceMode::Consistent);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{validate_record_count, DataError, Result};
use crate::generators::{check_as_of, ReferenceRanges};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Default dataset sizes.
pub mod defaults {
    /// Users in a default run.
    pub const USERS: usize = 20;
    /// Leads in a default run.
    pub const LEADS: usize = 100;
    /// Opportunities in a default run.
    pub const OPPORTUNITIES: usize = 150;
    /// Activities in a default run.
    pub const ACTIVITIES: usize = 300;
    /// Targets in a default run.
    pub const TARGETS: usize = 50;
}

/// Number of records to generate per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub users: usize,
    pub leads: usize,
    pub opportunities: usize,
    pub activities: usize,
    pub targets: usize,
}

impl Default for DatasetCounts {
    fn default() -> Self {
        Self {
            users: defaults::USERS,
            leads: defaults::LEADS,
            opportunities: defaults::OPPORTUNITIES,
            activities: defaults::ACTIVITIES,
            targets: defaults::TARGETS,
        }
    }
}

impl DatasetCounts {
    /// The same count for every dataset.
    pub fn uniform(count: usize) -> Self {
        Self {
            users: count,
            leads: count,
            opportunities: count,
            activities: count,
            targets: count,
        }
    }

    /// Total records across all datasets.
    pub fn total(&self) -> usize {
        self.users + self.leads + self.opportunities + self.activities + self.targets
    }

    fn validate(&self) -> Result<()> {
        validate_record_count("users", self.users)?;
        validate_record_count("leads", self.leads)?;
        validate_record_count("opportunities", self.opportunities)?;
        validate_record_count("activities", self.activities)?;
        validate_record_count("targets", self.targets)
    }
}

/// How cross-entity reference ids are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// References are drawn from the generated id range of the referenced
    /// collection, so every reference resolves.
    #[default]
    Consistent,
    /// References are drawn from the default id ranges (20 users, 100 leads,
    /// 150 deals) whatever was generated. With custom counts some references
    /// point at records that do not exist.
    Fixed,
}

impl ReferenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceMode::Consistent => "consistent",
            ReferenceMode::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceMode {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "consistent" => Ok(ReferenceMode::Consistent),
            "fixed" => Ok(ReferenceMode::Fixed),
            _ => Err(DataError::UnknownReferenceMode(s.to_string())),
        }
    }
}

/// Generator configuration with builder pattern.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Records per dataset.
    pub counts: DatasetCounts,
    /// RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Reference date for all relative dates. `None` means today.
    pub as_of: Option<NaiveDate>,
    /// Reference id policy.
    pub references: ReferenceMode,
}

impl GeneratorConfig {
    /// Creates a configuration with the default counts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts(mut self, counts: DatasetCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn with_reference_mode(mut self, references: ReferenceMode) -> Self {
        self.references = references;
        self
    }

    /// Checks count limits and that every reference range is drawable.
    ///
    /// # Errors
    ///
    /// - [`DataError::DatasetTooLarge`] if a count exceeds the per-dataset limit
    /// - [`DataError::InvalidConfig`] if, in consistent mode, a non-empty
    ///   dataset references an empty one, or if `as_of` is so close to the
    ///   calendar limits that relative dates would overflow
    pub fn validate(&self) -> Result<()> {
        self.counts.validate()?;
        if let Some(as_of) = self.as_of {
            check_as_of(as_of)?;
        }
        ReferenceRanges::resolve(&self.counts, self.references).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_RECORDS_PER_DATASET;
    use crate::generators::{MAX_DAYS_AFTER, MAX_DAYS_BEFORE};

    #[test]
    fn test_default_counts() {
        let counts = DatasetCounts::default();
        assert_eq!(counts.users, 20);
        assert_eq!(counts.leads, 100);
        assert_eq!(counts.opportunities, 150);
        assert_eq!(counts.activities, 300);
        assert_eq!(counts.targets, 50);
        assert_eq!(counts.total(), 620);
    }

    #[test]
    fn test_builder() {
        let as_of = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let config = GeneratorConfig::new()
            .with_counts(DatasetCounts::uniform(3))
            .with_seed(9)
            .with_as_of(as_of)
            .with_reference_mode(ReferenceMode::Fixed);

        assert_eq!(config.counts, DatasetCounts::uniform(3));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.as_of, Some(as_of));
        assert_eq!(config.references, ReferenceMode::Fixed);
    }

    #[test]
    fn test_reference_mode_parse() {
        assert_eq!("consistent".parse::<ReferenceMode>().unwrap(), ReferenceMode::Consistent);
        assert_eq!("FIXED".parse::<ReferenceMode>().unwrap(), ReferenceMode::Fixed);
        assert!(matches!(
            "loose".parse::<ReferenceMode>(),
            Err(DataError::UnknownReferenceMode(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_counts() {
        let mut counts = DatasetCounts::default();
        counts.activities = MAX_RECORDS_PER_DATASET + 1;
        let err = GeneratorConfig::new().with_counts(counts).validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::DatasetTooLarge {
                dataset: "activities",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_unreferenceable_users() {
        let mut counts = DatasetCounts::default();
        counts.users = 0;
        let err = GeneratorConfig::new().with_counts(counts).validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidConfig { ref parameter, .. } if parameter == "users"
        ));

        // Fixed mode draws from the default ranges, so empty users are fine.
        assert!(GeneratorConfig::new()
            .with_counts(counts)
            .with_reference_mode(ReferenceMode::Fixed)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_as_of_at_calendar_limits() {
        for as_of in [NaiveDate::MAX, NaiveDate::MIN] {
            let err = GeneratorConfig::new().with_as_of(as_of).validate().unwrap_err();
            assert!(matches!(
                err,
                DataError::InvalidConfig { ref parameter, .. } if parameter == "as_of"
            ));
        }

        let near_max = NaiveDate::MAX - chrono::Duration::days(MAX_DAYS_AFTER);
        assert!(GeneratorConfig::new().with_as_of(near_max).validate().is_ok());
        let near_min = NaiveDate::MIN + chrono::Duration::days(MAX_DAYS_BEFORE);
        assert!(GeneratorConfig::new().with_as_of(near_min).validate().is_ok());
    }

    #[test]
    fn test_validate_allows_all_empty() {
        assert!(GeneratorConfig::new()
            .with_counts(DatasetCounts::uniform(0))
            .validate()
            .is_ok());
    }
}
