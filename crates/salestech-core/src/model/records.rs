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

//! The five record types.
//!
//! Field names are the keys used in the dataset files. Cross-entity
//! references are plain id strings; nothing here enforces that the
//! referenced record exists (see [`crate::validation`]).

use super::categories::{
    ActivityType, CompanySize, DealStage, Industry, LeadSource, LeadStatus, LossReason, Outcome,
    Product, Region, Role, UserStatus,
};
use super::period::TimePeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A member of the sales team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub role: Role,
    pub team_id: String,
    pub region: Region,
    pub joining_date: NaiveDate,
    pub status: UserStatus,
}

/// A prospective customer, before it becomes a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub lead_id: String,
    pub created_at: NaiveDate,
    pub source: LeadSource,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub owner_user_id: String,
    pub status: LeadStatus,
}

/// A sales pursuit tracked through the stage pipeline.
///
/// `probability`, `actual_close_date` and `loss_reason` depend on `stage`;
/// see [`Opportunity::stage_violation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub deal_id: String,
    pub lead_id: String,
    pub owner_user_id: String,
    pub stage: DealStage,
    pub deal_value: u64,
    pub probability: f64,
    pub expected_close_date: NaiveDate,
    pub actual_close_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub loss_reason: Option<LossReason>,
    pub product: Product,
    pub region: Region,
}

/// Lower bound of the win probability of an open deal.
pub const OPEN_PROBABILITY_MIN: f64 = 0.1;
/// Upper bound of the win probability of an open deal.
pub const OPEN_PROBABILITY_MAX: f64 = 0.95;

impl Opportunity {
    /// Checks the stage-dependent fields.
    ///
    /// Returns a description of the first broken rule, or `None` if the
    /// record is consistent:
    ///
    /// - `closed_won`: probability 1.0, close date set, no loss reason
    /// - `closed_lost`: probability 0.0, close date set, loss reason set
    /// - open stages: probability in `[0.1, 0.95]`, no close date, no loss reason
    pub fn stage_violation(&self) -> Option<String> {
        match self.stage {
            DealStage::ClosedWon => {
                if self.probability != 1.0 {
                    Some(format!(
                        "closed_won deal has probability {} (expected 1.0)",
                        self.probability
                    ))
                } else if self.actual_close_date.is_none() {
                    Some("closed_won deal has no actual_close_date".to_string())
                } else if let Some(reason) = self.loss_reason {
                    Some(format!("closed_won deal has loss_reason '{}'", reason))
                } else {
                    None
                }
            }
            DealStage::ClosedLost => {
                if self.probability != 0.0 {
                    Some(format!(
                        "closed_lost deal has probability {} (expected 0.0)",
                        self.probability
                    ))
                } else if self.actual_close_date.is_none() {
                    Some("closed_lost deal has no actual_close_date".to_string())
                } else if self.loss_reason.is_none() {
                    Some("closed_lost deal has no loss_reason".to_string())
                } else {
                    None
                }
            }
            open => {
                if !(OPEN_PROBABILITY_MIN..=OPEN_PROBABILITY_MAX).contains(&self.probability) {
                    Some(format!(
                        "{} deal has probability {} outside [{}, {}]",
                        open, self.probability, OPEN_PROBABILITY_MIN, OPEN_PROBABILITY_MAX
                    ))
                } else if self.actual_close_date.is_some() {
                    Some(format!("{} deal has an actual_close_date", open))
                } else if self.loss_reason.is_some() {
                    Some(format!("{} deal has a loss_reason", open))
                } else {
                    None
                }
            }
        }
    }
}

/// A logged sales interaction on a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub activity_id: String,
    pub deal_id: String,
    pub user_id: String,
    pub activity_type: ActivityType,
    pub activity_date: NaiveDate,
    pub duration_minutes: u32,
    pub outcome: Outcome,
}

/// A monthly quota assigned to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub target_id: String,
    pub user_id: String,
    pub time_period: TimePeriod,
    pub target_value: u64,
}
