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

//! Sales team members.

use super::{days_before, GenContext, IdScheme};
use crate::model::User;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Number of teams users are spread across (`team_01` to `team_05`).
pub const TEAM_COUNT: u32 = 5;
/// Users joined within the last three years.
pub const MAX_TENURE_DAYS: i64 = 1095;

/// Generates `count` users.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use salestech_core::generators::{generate_users, GenContext, ReferenceRanges};
///
/// let mut rng = StdRng::seed_from_u64(12345);
/// let ctx = GenContext::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     ReferenceRanges::default(),
/// );
/// let users = generate_users(&mut rng, 3, &ctx);
/// assert_eq!(users[2].user_id, "user_003");
/// ```
pub fn generate_users<R: Rng>(rng: &mut R, count: usize, ctx: &GenContext) -> Vec<User> {
    let mut users = Vec::with_capacity(count);

    for i in 0..count {
        let first: String = FirstName().fake_with_rng(rng);
        let last: String = LastName().fake_with_rng(rng);

        users.push(User {
            user_id: IdScheme::USER.id(i),
            name: format!("{} {}", first, last),
            role: rng.gen(),
            team_id: format!("team_{:02}", rng.gen_range(1..=TEAM_COUNT)),
            region: rng.gen(),
            joining_date: days_before(rng, ctx.as_of, MAX_TENURE_DAYS),
            status: rng.gen(),
        });
    }

    users
}
