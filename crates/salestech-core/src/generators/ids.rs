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

//! Identifier schemes.
//!
//! Ids are `<prefix>_<n>` where `n` is the one-based record number padded
//! with zeros to a minimum width. Numbers wider than the width are printed in
//! full, so ids stay unique at any count.

use rand::Rng;
use std::num::NonZeroUsize;

/// Prefix and padding width of one entity's ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdScheme {
    pub prefix: &'static str,
    pub width: usize,
}

impl IdScheme {
    pub const USER: IdScheme = IdScheme::new("user", 3);
    pub const LEAD: IdScheme = IdScheme::new("lead", 4);
    pub const DEAL: IdScheme = IdScheme::new("deal", 4);
    pub const ACTIVITY: IdScheme = IdScheme::new("act", 5);
    pub const TARGET: IdScheme = IdScheme::new("tgt", 3);

    pub const fn new(prefix: &'static str, width: usize) -> Self {
        Self { prefix, width }
    }

    /// Id of the record at zero-based `index`.
    ///
    /// ```
    /// use salestech_core::generators::IdScheme;
    ///
    /// assert_eq!(IdScheme::USER.id(2), "user_003");
    /// assert_eq!(IdScheme::ACTIVITY.id(0), "act_00001");
    /// ```
    pub fn id(&self, index: usize) -> String {
        format!("{}_{:0width$}", self.prefix, index + 1, width = self.width)
    }

    /// A random id in `1..=range`.
    pub fn random_reference<R: Rng>(&self, rng: &mut R, range: NonZeroUsize) -> String {
        let index = rng.gen_range(0..range.get());
        self.id(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_padding() {
        assert_eq!(IdScheme::USER.id(0), "user_001");
        assert_eq!(IdScheme::LEAD.id(99), "lead_0100");
        assert_eq!(IdScheme::DEAL.id(149), "deal_0150");
        assert_eq!(IdScheme::TARGET.id(49), "tgt_050");
    }

    #[test]
    fn test_overflowing_width_stays_unique() {
        assert_eq!(IdScheme::USER.id(998), "user_999");
        assert_eq!(IdScheme::USER.id(999), "user_1000");
    }

    #[test]
    fn test_reference_within_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = NonZeroUsize::new(3).unwrap();
        for _ in 0..200 {
            let id = IdScheme::USER.random_reference(&mut rng, range);
            assert!(["user_001", "user_002", "user_003"].contains(&id.as_str()));
        }
    }
}
