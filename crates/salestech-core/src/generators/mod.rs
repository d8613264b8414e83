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

//! Record generators, one module per entity type.
//!
//! Every generator has the same shape:
//!
//! ```text
//! generate_<entity>(rng, count, ctx) -> Vec<Entity>
//! ```
//!
//! It returns exactly `count` records with sequential ids. Field values are
//! drawn independently per record from `rng`; dates are relative to
//! [`GenContext::as_of`] and reference ids are drawn from the ranges in
//! [`GenContext::refs`].

pub mod activities;
pub mod ids;
pub mod leads;
pub mod opportunities;
pub mod targets;
pub mod users;

pub use activities::generate_activities;
pub use ids::IdScheme;
pub use leads::generate_leads;
pub use opportunities::generate_opportunities;
pub use targets::generate_targets;
pub use users::generate_users;

use crate::config::{defaults, DatasetCounts, ReferenceMode};
use crate::error::{DataError, Result};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::num::NonZeroUsize;

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("reference range must be non-zero"),
    }
}

/// Id ranges that reference ids are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRanges {
    pub users: NonZeroUsize,
    pub leads: NonZeroUsize,
    pub deals: NonZeroUsize,
}

impl Default for ReferenceRanges {
    /// The historical fixed ranges: 20 users, 100 leads, 150 deals.
    fn default() -> Self {
        Self {
            users: non_zero(defaults::USERS),
            leads: non_zero(defaults::LEADS),
            deals: non_zero(defaults::OPPORTUNITIES),
        }
    }
}

impl ReferenceRanges {
    /// Resolves the ranges for a run.
    ///
    /// In [`ReferenceMode::Consistent`] each range equals the generated count
    /// of the referenced dataset. A dataset nobody references gets a
    /// placeholder range of one.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidConfig`] in consistent mode when a
    /// non-empty dataset references an empty one.
    pub fn resolve(counts: &DatasetCounts, mode: ReferenceMode) -> Result<Self> {
        if mode == ReferenceMode::Fixed {
            return Ok(Self::default());
        }

        let user_refs = counts.leads + counts.opportunities + counts.activities + counts.targets;
        Ok(Self {
            users: consistent_range("users", counts.users, user_refs)?,
            leads: consistent_range("leads", counts.leads, counts.opportunities)?,
            deals: consistent_range("opportunities", counts.opportunities, counts.activities)?,
        })
    }
}

fn consistent_range(
    dataset: &'static str,
    generated: usize,
    referencing: usize,
) -> Result<NonZeroUsize> {
    match NonZeroUsize::new(generated) {
        Some(range) => Ok(range),
        None if referencing == 0 => Ok(NonZeroUsize::MIN),
        None => Err(DataError::invalid_config(
            dataset,
            format!(
                "{} records reference {} but none are generated",
                referencing, dataset
            ),
        )),
    }
}

/// Shared inputs of every generator besides the RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenContext {
    /// Reference date for relative dates ("today").
    pub as_of: NaiveDate,
    /// Reference id ranges.
    pub refs: ReferenceRanges,
}

impl GenContext {
    pub fn new(as_of: NaiveDate, refs: ReferenceRanges) -> Self {
        Self { as_of, refs }
    }
}

/// Furthest any generated date lies before `as_of` (user tenure).
pub const MAX_DAYS_BEFORE: i64 = users::MAX_TENURE_DAYS;
/// Furthest any generated date lies after `as_of` (expected close).
pub const MAX_DAYS_AFTER: i64 = opportunities::MAX_EXPECTED_CLOSE_DAYS;

/// Checks that every date drawn relative to `as_of` is representable.
///
/// # Errors
///
/// Returns [`DataError::InvalidConfig`] for dates within
/// [`MAX_DAYS_BEFORE`] / [`MAX_DAYS_AFTER`] days of the calendar limits.
pub fn check_as_of(as_of: NaiveDate) -> Result<()> {
    let earliest = as_of.checked_sub_signed(Duration::days(MAX_DAYS_BEFORE));
    let latest = as_of.checked_add_signed(Duration::days(MAX_DAYS_AFTER));
    if earliest.is_some() && latest.is_some() {
        Ok(())
    } else {
        Err(DataError::invalid_config(
            "as_of",
            format!(
                "{} leaves no room for dates {} days before or {} days after it",
                as_of, MAX_DAYS_BEFORE, MAX_DAYS_AFTER
            ),
        ))
    }
}

/// A date between `max_days` days before `as_of` and `as_of`, inclusive.
pub(crate) fn days_before<R: Rng>(rng: &mut R, as_of: NaiveDate, max_days: i64) -> NaiveDate {
    as_of - Duration::days(rng.gen_range(0..=max_days))
}

/// A date between `as_of` and `max_days` days after it, inclusive.
pub(crate) fn days_after<R: Rng>(rng: &mut R, as_of: NaiveDate, max_days: i64) -> NaiveDate {
    as_of + Duration::days(rng.gen_range(0..=max_days))
}
