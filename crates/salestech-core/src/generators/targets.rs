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

//! Monthly user quotas.

use super::{GenContext, IdScheme};
use crate::model::{Target, TimePeriod};
use rand::Rng;

/// Periods range from six months before to six months after `as_of`.
pub const MAX_PERIOD_OFFSET_MONTHS: i32 = 6;
/// Smallest target value.
pub const MIN_TARGET_VALUE: u64 = 10_000;
/// Largest target value.
pub const MAX_TARGET_VALUE: u64 = 200_000;

/// Generates `count` targets for random users.
pub fn generate_targets<R: Rng>(rng: &mut R, count: usize, ctx: &GenContext) -> Vec<Target> {
    let current = TimePeriod::containing(ctx.as_of);
    let mut targets = Vec::with_capacity(count);

    for i in 0..count {
        let offset = rng.gen_range(-MAX_PERIOD_OFFSET_MONTHS..=MAX_PERIOD_OFFSET_MONTHS);
        targets.push(Target {
            target_id: IdScheme::TARGET.id(i),
            user_id: IdScheme::USER.random_reference(rng, ctx.refs.users),
            time_period: current.offset_months(offset),
            target_value: rng.gen_range(MIN_TARGET_VALUE..=MAX_TARGET_VALUE),
        });
    }

    targets
}
