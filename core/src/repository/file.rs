use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};

use crate::model::daily_record::DailyRecord;
use crate::repository::traits::RevenueRepository;

pub const DAILY_REVENUE_FILE_NAME: &str = "dados.json";
pub const STATE_REVENUE_FILE_NAME: &str = "faturamento_estados.json";
const LOCAL_DATA_DIR: &str = "utilities";

const SAMPLE_STATE_REVENUE: [(&str, f64); 5] = [
    ("SP", 67836.43),
    ("RJ", 36678.66),
    ("MG", 29229.88),
    ("ES", 27165.48),
    ("Outros", 19849.53),
];

pub fn sample_state_amounts() -> Vec<(String, f64)> {
    SAMPLE_STATE_REVENUE
        .iter()
        .map(|(state, amount)| (state.to_string(), *amount))
        .collect()
}

#[derive(Clone, Debug)]
pub struct FileRevenueRepository {
    base_dir: PathBuf,
}

impl FileRevenueRepository {
    /// Picks the data directory without touching the filesystem: the given
    /// one, else `./utilities` if present, else the platform data dir.
    pub fn resolve_base_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
        match base_dir {
            Some(dir) => Ok(dir),
            None => {
                let local = PathBuf::from(LOCAL_DATA_DIR);
                if local.is_dir() {
                    Ok(local)
                } else {
                    let data_dir = dirs::data_dir()
                        .ok_or_else(|| anyhow!("Could not determine data directory"))?;
                    Ok(data_dir.join("kata"))
                }
            }
        }
    }

    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = Self::resolve_base_dir(base_dir)?;
        tracing::debug!(base_dir = %path.display(), "revenue repository ready");
        Ok(FileRevenueRepository { base_dir: path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let file = File::open(path)
            .with_context(|| format!("File {} not found", path.display()))?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)
            .with_context(|| format!("Could not decode JSON file {}", path.display()))?;
        Ok(value)
    }
}

impl RevenueRepository for FileRevenueRepository {
    fn daily_records(&self) -> Result<Vec<DailyRecord>> {
        let path = self.base_dir.join(DAILY_REVENUE_FILE_NAME);
        let records: Vec<DailyRecord> = self.read_json(&path)?;
        tracing::info!(path = %path.display(), count = records.len(), "loaded daily revenue");
        Ok(records)
    }

    fn state_amounts(&self) -> Result<Vec<(String, f64)>> {
        let path = self.base_dir.join(STATE_REVENUE_FILE_NAME);
        if !path.exists() {
            tracing::warn!(path = %path.display(), "state revenue file missing, using sample data");
            return Ok(sample_state_amounts());
        }

        let map: Map<String, Value> = self.read_json(&path)?;
        let mut amounts = Vec::with_capacity(map.len());
        for (state, value) in map {
            let amount = value
                .as_f64()
                .ok_or_else(|| anyhow!("Amount for '{}' in {} is not a number", state, path.display()))?;
            amounts.push((state, amount));
        }
        tracing::info!(path = %path.display(), count = amounts.len(), "loaded state revenue");
        Ok(amounts)
    }
}
