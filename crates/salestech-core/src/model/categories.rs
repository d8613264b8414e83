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

//! Closed category fields shared by the record types.
//!
//! Every category is a fieldless enum with a fixed wire label per variant.
//! Labels are written verbatim, mixed casing included (`"Real Estate"`,
//! `"closed_won"`, `"Product A"`).
//!
//! Each enum also implements [`Distribution`] for [`Standard`], so a uniform
//! draw is just `rng.gen::<Role>()`.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a category enum with its wire labels.
///
/// Generates the enum itself, an `ALL` slice in declaration order, `as_str`,
/// `Display` and a uniform `Standard` distribution.
macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label written to dataset files.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Distribution<$name> for Standard {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $name {
                $name::ALL[rng.gen_range(0..$name::ALL.len())]
            }
        }
    };
}

category! {
    /// Position of a user in the sales organisation.
    pub enum Role {
        Rep => "rep",
        Manager => "manager",
        Admin => "admin",
    }
}

category! {
    /// Whether a user account is currently in use.
    pub enum UserStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

category! {
    /// Sales territory.
    pub enum Region {
        North => "North",
        South => "South",
        East => "East",
        West => "West",
        Central => "Central",
    }
}

category! {
    /// Channel a lead came in through.
    pub enum LeadSource {
        Referral => "referral",
        Web => "web",
        Event => "event",
        ColdCall => "cold_call",
        SocialMedia => "social_media",
        Advertising => "advertising",
    }
}

category! {
    pub enum Industry {
        Technology => "Technology",
        Healthcare => "Healthcare",
        Finance => "Finance",
        Manufacturing => "Manufacturing",
        Retail => "Retail",
        Education => "Education",
        Automotive => "Automotive",
        RealEstate => "Real Estate",
    }
}

category! {
    /// Company size bucket of a lead.
    pub enum CompanySize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Enterprise => "enterprise",
    }
}

category! {
    pub enum LeadStatus {
        New => "new",
        Contacted => "contacted",
        Qualified => "qualified",
        Unqualified => "unqualified",
        Converted => "converted",
    }
}

category! {
    /// Pipeline position of a deal, in pipeline order.
    pub enum DealStage {
        Prospecting => "prospecting",
        Qualification => "qualification",
        NeedsAnalysis => "needs_analysis",
        Proposal => "proposal",
        Negotiation => "negotiation",
        ClosedWon => "closed_won",
        ClosedLost => "closed_lost",
    }
}

impl DealStage {
    /// Returns true for `closed_won` and `closed_lost`.
    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

category! {
    /// Why a deal was lost. Only set on `closed_lost` deals.
    pub enum LossReason {
        Price => "price",
        Competitor => "competitor",
        NoBudget => "no_budget",
        LostInterest => "lost_interest",
        DecisionDelayed => "decision_delayed",
    }
}

category! {
    pub enum Product {
        ProductA => "Product A",
        ProductB => "Product B",
        ProductC => "Product C",
        ServicePackage => "Service Package",
        Consulting => "Consulting",
    }
}

category! {
    /// Kind of logged sales interaction.
    pub enum ActivityType {
        Call => "call",
        Email => "email",
        Meeting => "meeting",
        Demo => "demo",
        FollowUp => "follow_up",
        ProposalSent => "proposal_sent",
    }
}

category! {
    pub enum Outcome {
        Positive => "positive",
        Neutral => "neutral",
        Negative => "negative",
    }
}
