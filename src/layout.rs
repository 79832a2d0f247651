use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::profile::DataFileNames;

const DATE_FORMAT: &str = "%Y-%m-%d";
const JSON_SUFFIX: &str = ".json";

/// Every file location one run touches, resolved for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub catalog: PathBuf,
    pub catalog_key: String,
    pub aggregate: PathBuf,
    pub daily: PathBuf,
    pub ledger: PathBuf,
    pub date: String,
    daily_prefix: String,
}

impl DataPaths {
    pub fn resolve(data_dir: &Path, files: &DataFileNames, today: NaiveDate) -> Self {
        let date = today.format(DATE_FORMAT).to_string();
        let base = data_dir.to_path_buf();
        Self {
            catalog: base.join(&files.catalog),
            catalog_key: files.catalog_key.clone(),
            aggregate: base.join(&files.aggregate),
            daily: base.join(format!("{}{date}{JSON_SUFFIX}", files.daily_prefix)),
            ledger: base.join(&files.ledger),
            daily_prefix: files.daily_prefix.clone(),
            data_dir: base,
            date,
        }
    }

    /// True for this profile's dated result files, whatever their date.
    pub fn is_daily_file_name(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.daily_prefix) && file_name.ends_with(JSON_SUFFIX)
    }
}
