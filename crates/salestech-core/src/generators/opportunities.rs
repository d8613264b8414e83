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

//! Deals moving through the stage pipeline.
//!
//! This is the only generator with branching: the drawn stage decides the
//! win probability, whether the deal has an actual close date and whether it
//! carries a loss reason.
//!
//! | stage         | probability     | actual_close_date | loss_reason |
//! |---------------|-----------------|-------------------|-------------|
//! | `closed_won`  | 1.0             | set               | null        |
//! | `closed_lost` | 0.0             | set               | set         |
//! | open          | `[0.1, 0.95)`   | null              | null        |

use super::{days_after, days_before, GenContext, IdScheme};
use crate::model::{
    DealStage, LossReason, Opportunity, OPEN_PROBABILITY_MAX, OPEN_PROBABILITY_MIN,
};
use chrono::NaiveDate;
use rand::Rng;

/// Smallest deal value.
pub const MIN_DEAL_VALUE: u64 = 5_000;
/// Largest deal value.
pub const MAX_DEAL_VALUE: u64 = 500_000;
/// Expected close dates fall within the next six months.
pub const MAX_EXPECTED_CLOSE_DAYS: i64 = 180;
/// Closed deals closed within the last year.
pub const MAX_CLOSED_AGO_DAYS: i64 = 365;
/// Deals were created within the last two years.
pub const MAX_DEAL_AGE_DAYS: i64 = 730;
/// Deals were last updated within the last year.
pub const MAX_UPDATED_AGO_DAYS: i64 = 365;

/// Generates `count` deals referencing random leads and users.
pub fn generate_opportunities<R: Rng>(
    rng: &mut R,
    count: usize,
    ctx: &GenContext,
) -> Vec<Opportunity> {
    let mut opportunities = Vec::with_capacity(count);

    for i in 0..count {
        let stage: DealStage = rng.gen();
        let deal_value = rng.gen_range(MIN_DEAL_VALUE..=MAX_DEAL_VALUE);
        let lead_id = IdScheme::LEAD.random_reference(rng, ctx.refs.leads);
        let owner_user_id = IdScheme::USER.random_reference(rng, ctx.refs.users);
        let (probability, actual_close_date, loss_reason) = close_fields(rng, stage, ctx.as_of);

        opportunities.push(Opportunity {
            deal_id: IdScheme::DEAL.id(i),
            lead_id,
            owner_user_id,
            stage,
            deal_value,
            probability,
            expected_close_date: days_after(rng, ctx.as_of, MAX_EXPECTED_CLOSE_DAYS),
            actual_close_date,
            created_at: days_before(rng, ctx.as_of, MAX_DEAL_AGE_DAYS),
            updated_at: days_before(rng, ctx.as_of, MAX_UPDATED_AGO_DAYS),
            loss_reason,
            product: rng.gen(),
            region: rng.gen(),
        });
    }

    opportunities
}

/// Stage-dependent fields: probability, actual close date, loss reason.
fn close_fields<R: Rng>(
    rng: &mut R,
    stage: DealStage,
    as_of: NaiveDate,
) -> (f64, Option<NaiveDate>, Option<LossReason>) {
    if !stage.is_closed() {
        let probability = rng.gen_range(OPEN_PROBABILITY_MIN..OPEN_PROBABILITY_MAX);
        return (probability, None, None);
    }

    let closed = days_before(rng, as_of, MAX_CLOSED_AGO_DAYS);
    match stage {
        DealStage::ClosedWon => (1.0, Some(closed), None),
        _ => (0.0, Some(closed), Some(rng.gen())),
    }
}
