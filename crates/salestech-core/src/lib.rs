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

//! Synthetic sales CRM datasets.
//!
//! Generates randomized users, leads, opportunities (deals), activities and
//! targets for a fictitious sales organisation, and writes them to one file
//! per collection.
//!
//! ## Features
//!
//! - **Typed records**: every entity is a struct, every closed category an enum
//! - **Reproducible**: all generators take an explicit RNG; runs are seedable
//! - **Stage rules**: closed deals carry a close date, lost deals a loss reason
//! - **Reference modes**: consistent references, or the historical fixed ranges
//! - **Validation**: stage rules, id sequences and dangling references
//! - **Formats**: pretty JSON, YAML and CSV, readable back into records
//!
//! ## Usage
//!
//! ```no_run
//! use salestech_core::{
//!     validate_dataset, DatasetBuilder, DatasetWriter, GeneratorConfig, OutputFormat,
//! };
//!
//! # fn main() -> salestech_core::Result<()> {
//! let dataset = DatasetBuilder::new(GeneratorConfig::new().with_seed(42)).build()?;
//! assert!(validate_dataset(&dataset).is_clean(true));
//!
//! for summary in DatasetWriter::new("data", OutputFormat::Json).write(&dataset)? {
//!     println!("{}", summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod generators;
pub mod model;
pub mod output;
pub mod validation;

pub use config::{defaults, DatasetCounts, GeneratorConfig, ReferenceMode};
pub use dataset::{Dataset, DatasetBuilder, DatasetKind};
pub use error::{DataError, Result, MAX_RECORDS_PER_DATASET};
pub use generators::{
    generate_activities, generate_leads, generate_opportunities, generate_targets,
    generate_users, GenContext, ReferenceRanges,
};
pub use model::{
    Activity, ActivityType, CompanySize, DealStage, Industry, Lead, LeadSource, LeadStatus,
    LossReason, Opportunity, Outcome, Product, Region, Role, Target, TimePeriod, User, UserStatus,
};
pub use output::{read_dataset, DatasetSummary, DatasetWriter, OutputFormat};
pub use validation::{validate_dataset, Issue, Severity, ValidationReport};
