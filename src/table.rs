//! Cluster cost tables: sparse (frequency, cost) measurements per CPU cluster together with
//! the target frequencies a denser energy model table needs.
//!
//! A table is read from JSON:
//! ```json
//! {
//!   "clusters": [
//!     {
//!       "name": "Little cluster",
//!       "samples": [[614400, 8], [883200, 14], [1036800, 18], [1363200, 28]],
//!       "targets": [633600, 902400]
//!     }
//!   ]
//! }
//! ```

use std::{fmt::Display, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{error::TableError, sample::Sample, spline::Spline};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    pub clusters: Vec<ClusterCosts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCosts {
    pub name: String,
    pub samples: Vec<Sample>,
    pub targets: Vec<f64>,
}

/// Interpolated cost at one target frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostPoint {
    pub frequency: f64,
    pub cost: f64,
}

impl CostTable {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading cost table");
        let table = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), clusters = table.clusters.len(), "loaded cost table");
        Ok(table)
    }

    /// Report for every cluster: its name followed by one row per target frequency.
    /// Clusters are separated by two blank lines. Fails on the first cluster that cannot be
    /// interpolated.
    pub fn render(&self) -> Result<String, TableError> {
        let mut sections = Vec::with_capacity(self.clusters.len());
        for cluster in &self.clusters {
            let mut section = cluster.name.clone();
            for point in cluster.interpolate()? {
                section.push('\n');
                section.push_str(&point.to_string());
            }
            sections.push(section);
        }
        Ok(sections.join("\n\n\n"))
    }
}

impl ClusterCosts {
    /// Builds a cluster from the whitespace separated "FREQ COST" pair format used by
    /// kernel energy model notes.
    pub fn from_text(name: &str, samples: &str, targets: Vec<f64>) -> Result<Self, TableError> {
        Ok(ClusterCosts { name: name.to_string(), samples: parse_samples(samples)?, targets })
    }

    /// Fits the cluster samples and evaluates the curve at every target frequency.
    pub fn interpolate(&self) -> Result<Vec<CostPoint>, TableError> {
        let spline = Spline::new(self.samples.clone()).map_err(|source| TableError::Cluster {
            cluster: self.name.clone(),
            source,
        })?;
        let costs = spline.batch_evaluate(&self.targets).map_err(|source| TableError::Cluster {
            cluster: self.name.clone(),
            source,
        })?;

        Ok(self.targets
            .iter()
            .zip(costs)
            .map(|(frequency, cost)| CostPoint { frequency: *frequency, cost })
            .collect())
    }
}

impl Display for CostPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>7.0} {:.0}", self.frequency, self.cost)
    }
}

/// Parses whitespace separated "FREQ COST" pairs.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, TableError> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| TableError::MalformedSamples(format!(
                "'{}' is not a number",
                token
            )))
        })
        .collect::<Result<Vec<f64>, TableError>>()?;

    if values.len() % 2 != 0 {
        return Err(TableError::MalformedSamples(format!(
            "odd number of values ({}), expected frequency and cost pairs",
            values.len()
        )));
    }

    Ok(values.chunks_exact(2).map(|pair| Sample::new(pair[0], pair[1])).collect())
}
