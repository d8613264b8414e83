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

//! Prospective customers.

use super::{days_before, GenContext, IdScheme};
use crate::model::Lead;
use rand::Rng;

/// Leads were created within the last two years.
pub const MAX_LEAD_AGE_DAYS: i64 = 730;

/// Generates `count` leads, each owned by a random user.
pub fn generate_leads<R: Rng>(rng: &mut R, count: usize, ctx: &GenContext) -> Vec<Lead> {
    let mut leads = Vec::with_capacity(count);

    for i in 0..count {
        leads.push(Lead {
            lead_id: IdScheme::LEAD.id(i),
            created_at: days_before(rng, ctx.as_of, MAX_LEAD_AGE_DAYS),
            source: rng.gen(),
            industry: rng.gen(),
            company_size: rng.gen(),
            owner_user_id: IdScheme::USER.random_reference(rng, ctx.refs.users),
            status: rng.gen(),
        });
    }

    leads
}
