use serde::Serialize;

use crate::trends::repo_types::{Score, Trend};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendItem {
    pub trend: Option<String>,
    pub score: Option<Score>,
}

impl From<Trend> for TrendItem {
    fn from(t: Trend) -> Self {
        Self {
            trend: t.name,
            score: t.score,
        }
    }
}
