//! Ranked result - scores sorted best first with 1-based ranks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScoreSeries;

/// Column names of a ranked result.
pub const RANKED_COLUMNS: [&str; 2] = ["Score", "Rank"];

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub id: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Rank")]
    pub rank: usize,
}

/// Scores sorted in descending order, ranked 1..=n.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    rows: Vec<RankedRow>,
}

impl RankedResult {
    /// Sorts scores descending and assigns ranks by position.
    ///
    /// The sort is stable: equal scores keep their original row order.
    pub fn from_scores(scores: &ScoreSeries) -> Self {
        let mut pairs: Vec<(&str, f64)> = scores.iter().collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));

        let rows = pairs
            .into_iter()
            .enumerate()
            .map(|(pos, (id, score))| RankedRow {
                id: id.to_string(),
                score,
                rank: pos + 1,
            })
            .collect();

        Self { rows }
    }

    /// Always `["Score", "Rank"]`.
    pub fn columns(&self) -> [&'static str; 2] {
        RANKED_COLUMNS
    }

    /// Rows ordered from rank 1 downwards.
    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rank-1 row.
    pub fn top(&self) -> Option<&RankedRow> {
        self.rows.first()
    }

    /// Row for the given sample id.
    pub fn get(&self, id: &str) -> Option<&RankedRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}
