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

//! Generate, write, read back and validate whole datasets.

use chrono::NaiveDate;
use salestech_core::{
    read_dataset, validate_dataset, DatasetBuilder, DatasetCounts, DatasetKind, DatasetWriter,
    GeneratorConfig, OutputFormat, ReferenceMode,
};
use std::fs;
use tempfile::TempDir;

fn config(counts: DatasetCounts) -> GeneratorConfig {
    GeneratorConfig::new()
        .with_counts(counts)
        .with_seed(2025)
        .with_as_of(NaiveDate::from_ymd_opt(2025, 10, 19).unwrap())
}

#[test]
fn test_five_of_each_writes_five_files() {
    let dir = TempDir::new().unwrap();
    let dataset = DatasetBuilder::new(config(DatasetCounts::uniform(5)))
        .build()
        .unwrap();

    let summaries = DatasetWriter::new(dir.path(), OutputFormat::Json)
        .write(&dataset)
        .unwrap();

    assert_eq!(summaries.len(), 5);
    for summary in &summaries {
        assert_eq!(summary.count, 5);
        let content = fs::read_to_string(&summary.path).unwrap();
        let records: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 5);
    }

    let mut files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(
        files,
        [
            "activities.json",
            "leads.json",
            "opportunities.json",
            "targets.json",
            "users.json"
        ]
    );
}

#[test]
fn test_default_run_round_trips_and_validates() {
    let dir = TempDir::new().unwrap();
    let dataset = DatasetBuilder::new(config(DatasetCounts::default()))
        .build()
        .unwrap();

    for format in [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Csv] {
        let out = dir.path().join(format.name());
        DatasetWriter::new(&out, format).write(&dataset).unwrap();

        let read = read_dataset(&out, format).unwrap();
        assert_eq!(read.counts(), DatasetCounts::default());
        assert_eq!(read, dataset);
        assert!(validate_dataset(&read).is_clean(true));
    }
}

#[test]
fn test_fixed_references_are_noisy_with_small_counts() {
    let dataset = DatasetBuilder::new(
        config(DatasetCounts::uniform(5)).with_reference_mode(ReferenceMode::Fixed),
    )
    .build()
    .unwrap();

    let report = validate_dataset(&dataset);
    assert_eq!(report.error_count(), 0);
    assert!(report.warning_count() > 0);
    assert!(report.warnings().all(|w| w.dataset != DatasetKind::Users));
}

#[test]
fn test_json_field_names() {
    let dir = TempDir::new().unwrap();
    let dataset = DatasetBuilder::new(config(DatasetCounts::uniform(1)))
        .build()
        .unwrap();
    DatasetWriter::new(dir.path(), OutputFormat::Json)
        .write(&dataset)
        .unwrap();

    let deals: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("opportunities.json")).unwrap())
            .unwrap();
    let deal = deals[0].as_object().unwrap();
    for key in [
        "deal_id",
        "lead_id",
        "owner_user_id",
        "stage",
        "deal_value",
        "probability",
        "expected_close_date",
        "actual_close_date",
        "created_at",
        "updated_at",
        "loss_reason",
        "product",
        "region",
    ] {
        assert!(deal.contains_key(key), "missing {}", key);
    }

    let targets: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("targets.json")).unwrap())
            .unwrap();
    let period = targets[0]["time_period"].as_str().unwrap();
    assert_eq!(period.len(), 7);
    assert_eq!(&period[4..5], "-");
}
