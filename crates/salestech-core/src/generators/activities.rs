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

//! Logged sales interactions.

use super::{days_before, GenContext, IdScheme};
use crate::model::Activity;
use rand::Rng;

/// Shortest activity, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 15;
/// Longest activity, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 120;
/// Activities happened within the last six months.
pub const MAX_ACTIVITY_AGE_DAYS: i64 = 180;

/// Generates `count` activities, each tied to a random deal and user.
pub fn generate_activities<R: Rng>(rng: &mut R, count: usize, ctx: &GenContext) -> Vec<Activity> {
    let mut activities = Vec::with_capacity(count);

    for i in 0..count {
        activities.push(Activity {
            activity_id: IdScheme::ACTIVITY.id(i),
            deal_id: IdScheme::DEAL.random_reference(rng, ctx.refs.deals),
            user_id: IdScheme::USER.random_reference(rng, ctx.refs.users),
            activity_type: rng.gen(),
            activity_date: days_before(rng, ctx.as_of, MAX_ACTIVITY_AGE_DAYS),
            duration_minutes: rng.gen_range(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES),
            outcome: rng.gen(),
        });
    }

    activities
}
