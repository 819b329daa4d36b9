//! Cities with trip data and the table mapping each one to its backing file.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{BikeshareError, Result};

/// The fixed set of cities trip logs exist for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    #[serde(rename = "chicago")]
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    #[serde(rename = "washington")]
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<City> {
        let name = name.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.name() == name)
    }

    fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps each [`City`] to the CSV file holding its trips.
///
/// Overrides can be stored as a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "chicago_2017.csv",
///   "new york city": "/srv/bikeshare/nyc.csv"
/// }
/// ```
/// Cities not named keep their default file.
#[derive(Debug, Clone)]
pub struct CityTable {
    data_dir: PathBuf,
    entries: HashMap<City, PathBuf>,
}

impl CityTable {
    /// The stock table resolving files relative to `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let entries = City::ALL
            .into_iter()
            .map(|c| (c, PathBuf::from(c.default_file())))
            .collect();
        Self {
            data_dir: data_dir.into(),
            entries,
        }
    }

    /// Loads overrides from a JSON file at `path` on top of the stock table.
    pub fn load(data_dir: impl Into<PathBuf>, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BikeshareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| BikeshareError::Config(format!("{}: {e}", path.display())))?;

        let mut table = Self::new(data_dir);
        for (name, file) in overrides {
            let city = City::from_name(&name)
                .ok_or_else(|| BikeshareError::Config(format!("unknown city '{name}'")))?;
            table.entries.insert(city, PathBuf::from(file));
        }
        Ok(table)
    }

    /// Resolves the file for `city`. Absolute entries are returned as-is.
    pub fn path_for(&self, city: City) -> PathBuf {
        let file = self
            .entries
            .get(&city)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(city.default_file()));
        self.data_dir.join(file)
    }
}
