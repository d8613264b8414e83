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

//! SalesTech CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **generate**: build users, leads, opportunities, activities and targets
//!   and write one file per dataset (json, yaml or csv). This is also what a
//!   bare `salestech` invocation does.
//! - **validate**: read a generated directory back and check stage rules, id
//!   sequences and cross-dataset references.
//!
//! # Exit Status
//!
//! `0` on success, `1` on any error. The error message goes to stderr as
//! `Error: <message>`.

pub mod cli;
pub mod commands;
pub mod error;
