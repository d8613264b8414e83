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

//! Typed data model for the sales CRM domain.
//!
//! - **categories**: closed enums (role, stage, status, ...)
//! - **period**: `YYYY-MM` target periods
//! - **records**: the five record structs

pub mod categories;
pub mod period;
pub mod records;

pub use categories::{
    ActivityType, CompanySize, DealStage, Industry, LeadSource, LeadStatus, LossReason, Outcome,
    Product, Region, Role, UserStatus,
};
pub use period::TimePeriod;
pub use records::{
    Activity, Lead, Opportunity, Target, User, OPEN_PROBABILITY_MAX, OPEN_PROBABILITY_MIN,
};
