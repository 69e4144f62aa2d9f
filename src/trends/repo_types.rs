use serde::{Deserialize, Serialize};

/// A trend score as stored by the offline job; integers stay integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
}

impl Score {
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Int(v) => v as f64,
            Score::Float(v) => v,
        }
    }
}

/// A document from the precomputed trends collection.
///
/// Written by the offline job; `_id` and any other fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub score: Option<Score>,
}
