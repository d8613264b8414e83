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

//! Dataset files on disk.
//!
//! A dataset directory holds one file per collection, named after it:
//! `users.json`, `leads.json`, `opportunities.json`, `activities.json` and
//! `targets.json` (or `.yaml` / `.csv`).
//!
//! | format | layout                                                |
//! |--------|-------------------------------------------------------|
//! | json   | array of objects, pretty-printed with 2-space indent  |
//! | yaml   | sequence of mappings                                  |
//! | csv    | header row plus one row per record, null as empty     |

use crate::dataset::{Dataset, DatasetKind};
use crate::error::{DataError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// File format of a dataset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Csv => "csv",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(DataError::UnknownFormat(s.to_string())),
        }
    }
}

/// What was written for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub kind: DatasetKind,
    pub count: usize,
    pub path: PathBuf,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated {} {} records", self.count, self.kind)
    }
}

/// Path of one collection's file inside `dir`.
pub fn dataset_path(dir: &Path, kind: DatasetKind, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", kind.name(), format.extension()))
}

/// Writes datasets into a directory.
///
/// # Examples
///
/// ```no_run
/// use salestech_core::{DatasetBuilder, DatasetWriter, GeneratorConfig, OutputFormat};
///
/// let dataset = DatasetBuilder::new(GeneratorConfig::new()).build().unwrap();
/// let summaries = DatasetWriter::new("out", OutputFormat::Json)
///     .write(&dataset)
///     .unwrap();
/// for summary in &summaries {
///     println!("{}", summary);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    dir: PathBuf,
    format: OutputFormat,
}

impl DatasetWriter {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes all five collections, creating the directory if needed.
    ///
    /// Stops at the first failure; files already written are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the directory or a file cannot be written,
    /// or [`DataError::Serialize`] if encoding fails.
    pub fn write(&self, dataset: &Dataset) -> Result<Vec<DatasetSummary>> {
        fs::create_dir_all(&self.dir).map_err(|e| DataError::io(&self.dir, e))?;

        let summaries = vec![
            self.write_records(DatasetKind::Users, &dataset.users)?,
            self.write_records(DatasetKind::Leads, &dataset.leads)?,
            self.write_records(DatasetKind::Opportunities, &dataset.opportunities)?,
            self.write_records(DatasetKind::Activities, &dataset.activities)?,
            self.write_records(DatasetKind::Targets, &dataset.targets)?,
        ];

        info!(
            "Wrote {} records to {}",
            summaries.iter().map(|s| s.count).sum::<usize>(),
            self.dir.display()
        );
        Ok(summaries)
    }

    /// Writes one collection to `<dir>/<kind>.<ext>`.
    pub fn write_records<T: Serialize>(
        &self,
        kind: DatasetKind,
        records: &[T],
    ) -> Result<DatasetSummary> {
        let path = dataset_path(&self.dir, kind, self.format);
        let encoded = encode(kind, self.format, records)?;
        fs::write(&path, encoded).map_err(|e| DataError::io(&path, e))?;

        debug!("Wrote {} {} records to {}", records.len(), kind, path.display());
        Ok(DatasetSummary {
            kind,
            count: records.len(),
            path,
        })
    }
}

fn encode<T: Serialize>(kind: DatasetKind, format: OutputFormat, records: &[T]) -> Result<Vec<u8>> {
    let serialize_error = |message: String| DataError::Serialize {
        dataset: kind.name(),
        format: format.name(),
        message,
    };

    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(records).map_err(|e| serialize_error(e.to_string()))?;
            json.push('\n');
            Ok(json.into_bytes())
        }
        OutputFormat::Yaml => serde_yaml::to_string(records)
            .map(String::into_bytes)
            .map_err(|e| serialize_error(e.to_string())),
        OutputFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
            for record in records {
                wtr.serialize(record)
                    .map_err(|e| serialize_error(e.to_string()))?;
            }
            wtr.into_inner()
                .map_err(|e| serialize_error(e.to_string()))
        }
    }
}

/// Reads a dataset directory written by [`DatasetWriter`].
///
/// # Errors
///
/// Returns [`DataError::Io`] if a file is missing or unreadable, and
/// [`DataError::Deserialize`] if a file does not decode into its record type.
pub fn read_dataset(dir: &Path, format: OutputFormat) -> Result<Dataset> {
    Ok(Dataset {
        users: read_records(dir, DatasetKind::Users, format)?,
        leads: read_records(dir, DatasetKind::Leads, format)?,
        opportunities: read_records(dir, DatasetKind::Opportunities, format)?,
        activities: read_records(dir, DatasetKind::Activities, format)?,
        targets: read_records(dir, DatasetKind::Targets, format)?,
    })
}

/// Reads one collection from `<dir>/<kind>.<ext>`.
pub fn read_records<T: DeserializeOwned>(
    dir: &Path,
    kind: DatasetKind,
    format: OutputFormat,
) -> Result<Vec<T>> {
    let path = dataset_path(dir, kind, format);
    let content = fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
    let decode_error = |message: String| DataError::Deserialize {
        path: path.clone(),
        message,
    };

    let records: Vec<T> = match format {
        OutputFormat::Json => {
            serde_json::from_str(&content).map_err(|e| decode_error(e.to_string()))?
        }
        OutputFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| decode_error(e.to_string()))?
        }
        OutputFormat::Csv => csv::Reader::from_reader(content.as_bytes())
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| decode_error(e.to_string()))?,
    };

    debug!("Read {} {} records from {}", records.len(), kind, path.display());
    Ok(records)
}
