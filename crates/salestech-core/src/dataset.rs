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

//! The five collections and the builder that produces them.

use crate::config::{DatasetCounts, GeneratorConfig};
use crate::error::Result;
use crate::generators::{
    generate_activities, generate_leads, generate_opportunities, generate_targets,
    generate_users, GenContext, ReferenceRanges,
};
use crate::model::{Activity, Lead, Opportunity, Target, User};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// One of the five datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Users,
    Leads,
    Opportunities,
    Activities,
    Targets,
}

impl DatasetKind {
    /// Returns all kinds in generation order.
    pub fn all() -> &'static [DatasetKind] {
        &[
            Self::Users,
            Self::Leads,
            Self::Opportunities,
            Self::Activities,
            Self::Targets,
        ]
    }

    /// Dataset name, also used as the output file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Leads => "leads",
            Self::Opportunities => "opportunities",
            Self::Activities => "activities",
            Self::Targets => "targets",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete generated dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub leads: Vec<Lead>,
    pub opportunities: Vec<Opportunity>,
    pub activities: Vec<Activity>,
    pub targets: Vec<Target>,
}

impl Dataset {
    /// Record counts per collection.
    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            users: self.users.len(),
            leads: self.leads.len(),
            opportunities: self.opportunities.len(),
            activities: self.activities.len(),
            targets: self.targets.len(),
        }
    }

    /// Record count of one collection.
    pub fn len_of(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Users => self.users.len(),
            DatasetKind::Leads => self.leads.len(),
            DatasetKind::Opportunities => self.opportunities.len(),
            DatasetKind::Activities => self.activities.len(),
            DatasetKind::Targets => self.targets.len(),
        }
    }
}

/// Builds a [`Dataset`] from a [`GeneratorConfig`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salestech_core::{DatasetBuilder, DatasetCounts, GeneratorConfig};
///
/// let config = GeneratorConfig::new()
///     .with_counts(DatasetCounts::uniform(5))
///     .with_seed(42)
///     .with_as_of(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
///
/// let dataset = DatasetBuilder::new(config).build().unwrap();
/// assert_eq!(dataset.counts(), DatasetCounts::uniform(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    config: GeneratorConfig,
}

impl DatasetBuilder {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The seed this builder will use.
    ///
    /// Without a configured seed a fresh one is drawn and logged, so any run
    /// can be reproduced with `with_seed`.
    pub fn resolve_seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                info!("No seed configured, using seed {}", seed);
                seed
            }
        }
    }

    /// The reference date this builder will use.
    pub fn resolve_as_of(&self) -> NaiveDate {
        self.config
            .as_of
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Generates all five collections with a `StdRng` seeded from the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(&self) -> Result<Dataset> {
        let mut rng = StdRng::seed_from_u64(self.resolve_seed());
        self.build_with_rng(&mut rng)
    }

    /// Generates all five collections with a caller-provided RNG.
    ///
    /// Generation order is users, leads, opportunities, activities, targets,
    /// all drawing from the same `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Dataset> {
        self.config.validate()?;

        let counts = self.config.counts;
        let refs = ReferenceRanges::resolve(&counts, self.config.references)?;
        let ctx = GenContext::new(self.resolve_as_of(), refs);

        debug!(
            "Generating dataset as of {} with {} references: {:?}",
            ctx.as_of, self.config.references, counts
        );

        let users = generate_users(rng, counts.users, &ctx);
        debug!("Generated {} users", users.len());
        let leads = generate_leads(rng, counts.leads, &ctx);
        debug!("Generated {} leads", leads.len());
        let opportunities = generate_opportunities(rng, counts.opportunities, &ctx);
        debug!("Generated {} opportunities", opportunities.len());
        let activities = generate_activities(rng, counts.activities, &ctx);
        debug!("Generated {} activities", activities.len());
        let targets = generate_targets(rng, counts.targets, &ctx);
        debug!("Generated {} targets", targets.len());

        Ok(Dataset {
            users,
            leads,
            opportunities,
            activities,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceMode;
    use crate::error::DataError;

    fn config(counts: DatasetCounts) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_counts(counts)
            .with_seed(12345)
            .with_as_of(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
    }

    #[test]
    fn test_default_sizes() {
        let dataset = DatasetBuilder::new(config(DatasetCounts::default()))
            .build()
            .unwrap();
        assert_eq!(dataset.users.len(), 20);
        assert_eq!(dataset.leads.len(), 100);
        assert_eq!(dataset.opportunities.len(), 150);
        assert_eq!(dataset.activities.len(), 300);
        assert_eq!(dataset.targets.len(), 50);
        for kind in DatasetKind::all() {
            assert!(dataset.len_of(*kind) > 0);
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = DatasetBuilder::new(config(DatasetCounts::uniform(30)))
            .build()
            .unwrap();
        let b = DatasetBuilder::new(config(DatasetCounts::uniform(30)))
            .build()
            .unwrap();
        assert_eq!(a, b);

        let c = DatasetBuilder::new(config(DatasetCounts::uniform(30)).with_seed(54321))
            .build()
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let counts = DatasetCounts {
            leads: 0,
            ..DatasetCounts::default()
        };
        let err = DatasetBuilder::new(config(counts)).build().unwrap_err();
        assert!(matches!(err, DataError::InvalidConfig { .. }));

        let fixed = config(counts).with_reference_mode(ReferenceMode::Fixed);
        let dataset = DatasetBuilder::new(fixed).build().unwrap();
        assert!(dataset.leads.is_empty());
        assert_eq!(dataset.opportunities.len(), 150);
    }

    #[test]
    fn test_resolve_defaults() {
        let builder = DatasetBuilder::new(GeneratorConfig::new().with_seed(7));
        assert_eq!(builder.resolve_seed(), 7);
        assert_eq!(builder.resolve_as_of(), Local::now().date_naive());
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = DatasetKind::all().iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["users", "leads", "opportunities", "activities", "targets"]
        );
    }
}
