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

//! Consistency checks over a whole dataset.
//!
//! Errors are records that break a generation rule: a deal whose stage
//! disagrees with its probability, close date or loss reason, an activity
//! duration out of range, or ids that are not the expected sequence.
//!
//! Warnings are references to records that do not exist. They are expected
//! when a dataset was generated with [`ReferenceMode::Fixed`] and custom
//! counts, so they only fail validation in strict mode.
//!
//! [`ReferenceMode::Fixed`]: crate::ReferenceMode::Fixed

use crate::dataset::{Dataset, DatasetKind};
use crate::generators::activities::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
use crate::generators::IdScheme;
use std::collections::HashSet;
use std::fmt;

/// How serious an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding of [`validate_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub dataset: DatasetKind,
    /// Id of the offending record.
    pub record_id: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{}: {} {}: {}",
            level, self.dataset, self.record_id, self.message
        )
    }
}

/// All issues found in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when there are no errors, and in strict mode no warnings either.
    pub fn is_clean(&self, strict: bool) -> bool {
        if strict {
            self.issues.is_empty()
        } else {
            self.error_count() == 0
        }
    }

    fn push(
        &mut self,
        severity: Severity,
        dataset: DatasetKind,
        record_id: &str,
        message: impl Into<String>,
    ) {
        self.issues.push(Issue {
            severity,
            dataset,
            record_id: record_id.to_string(),
            message: message.into(),
        });
    }
}

/// Checks stage rules, value ranges, id sequences and references.
///
/// # Examples
///
/// ```
/// use salestech_core::{validate_dataset, DatasetBuilder, DatasetCounts, GeneratorConfig};
///
/// let config = GeneratorConfig::new()
///     .with_counts(DatasetCounts::uniform(10))
///     .with_seed(1);
/// let dataset = DatasetBuilder::new(config).build().unwrap();
///
/// let report = validate_dataset(&dataset);
/// assert!(report.is_clean(true));
/// ```
pub fn validate_dataset(dataset: &Dataset) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_ids(
        &mut report,
        DatasetKind::Users,
        IdScheme::USER,
        dataset.users.iter().map(|u| u.user_id.as_str()),
    );
    check_ids(
        &mut report,
        DatasetKind::Leads,
        IdScheme::LEAD,
        dataset.leads.iter().map(|l| l.lead_id.as_str()),
    );
    check_ids(
        &mut report,
        DatasetKind::Opportunities,
        IdScheme::DEAL,
        dataset.opportunities.iter().map(|o| o.deal_id.as_str()),
    );
    check_ids(
        &mut report,
        DatasetKind::Activities,
        IdScheme::ACTIVITY,
        dataset.activities.iter().map(|a| a.activity_id.as_str()),
    );
    check_ids(
        &mut report,
        DatasetKind::Targets,
        IdScheme::TARGET,
        dataset.targets.iter().map(|t| t.target_id.as_str()),
    );

    let users: HashSet<&str> = dataset.users.iter().map(|u| u.user_id.as_str()).collect();
    let leads: HashSet<&str> = dataset.leads.iter().map(|l| l.lead_id.as_str()).collect();
    let deals: HashSet<&str> = dataset
        .opportunities
        .iter()
        .map(|o| o.deal_id.as_str())
        .collect();

    for lead in &dataset.leads {
        check_references(
            &mut report,
            DatasetKind::Leads,
            &lead.lead_id,
            &[("owner_user_id", lead.owner_user_id.as_str(), &users)],
        );
    }
    for deal in &dataset.opportunities {
        check_references(
            &mut report,
            DatasetKind::Opportunities,
            &deal.deal_id,
            &[
                ("lead_id", deal.lead_id.as_str(), &leads),
                ("owner_user_id", deal.owner_user_id.as_str(), &users),
            ],
        );
    }
    for activity in &dataset.activities {
        check_references(
            &mut report,
            DatasetKind::Activities,
            &activity.activity_id,
            &[
                ("deal_id", activity.deal_id.as_str(), &deals),
                ("user_id", activity.user_id.as_str(), &users),
            ],
        );
    }
    for target in &dataset.targets {
        check_references(
            &mut report,
            DatasetKind::Targets,
            &target.target_id,
            &[("user_id", target.user_id.as_str(), &users)],
        );
    }

    for deal in &dataset.opportunities {
        if !(0.0..=1.0).contains(&deal.probability) {
            report.push(
                Severity::Error,
                DatasetKind::Opportunities,
                &deal.deal_id,
                format!("probability {} outside [0, 1]", deal.probability),
            );
        } else if let Some(message) = deal.stage_violation() {
            report.push(Severity::Error, DatasetKind::Opportunities, &deal.deal_id, message);
        }
    }

    for activity in &dataset.activities {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&activity.duration_minutes) {
            report.push(
                Severity::Error,
                DatasetKind::Activities,
                &activity.activity_id,
                format!(
                    "duration_minutes {} outside {}..={}",
                    activity.duration_minutes, MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
                ),
            );
        }
    }

    report
}

/// Warns about every `(field, id, known ids)` reference whose id is unknown.
fn check_references(
    report: &mut ValidationReport,
    dataset: DatasetKind,
    record_id: &str,
    references: &[(&str, &str, &HashSet<&str>)],
) {
    for &(field, reference, known) in references {
        if !known.contains(reference) {
            report.push(
                Severity::Warning,
                dataset,
                record_id,
                format!("{} '{}' does not exist", field, reference),
            );
        }
    }
}

/// Ids must be exactly `scheme.id(0)`, `scheme.id(1)`, ... in order.
fn check_ids<'a>(
    report: &mut ValidationReport,
    dataset: DatasetKind,
    scheme: IdScheme,
    ids: impl Iterator<Item = &'a str>,
) {
    for (index, id) in ids.enumerate() {
        let expected = scheme.id(index);
        if id != expected {
            report.push(
                Severity::Error,
                dataset,
                id,
                format!("expected id '{}' at position {}", expected, index + 1),
            );
        }
    }
}
