use anyhow::Context;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::FindOptions,
    Collection, Database,
};
use tracing::warn;

use crate::trends::repo_types::Trend;

/// Read-only view over the trends produced by the offline job.
#[async_trait]
pub trait TrendReader: Send + Sync {
    /// Highest-scoring trends of `category`, best first, at most `limit`.
    async fn top_by_category(&self, category: &str, limit: usize) -> anyhow::Result<Vec<Trend>>;
}

#[derive(Clone)]
pub struct MongoTrendReader {
    collection: Collection<Document>,
}

impl MongoTrendReader {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection::<Document>(collection),
        }
    }
}

/// Filter and options for the top trends of one category.
pub(crate) fn top_trends_query(category: &str, limit: usize) -> (Document, FindOptions) {
    let filter = doc! { "category": category };
    let options = FindOptions::builder()
        .sort(doc! { "score": -1 })
        .limit(limit as i64)
        .build();
    (filter, options)
}

/// Decodes raw documents one by one; a document the job wrote with the
/// wrong field types is logged and skipped.
pub(crate) fn decode_trends(docs: Vec<Document>) -> Vec<Trend> {
    docs.into_iter()
        .filter_map(|raw| {
            let id = raw.get("_id").map(|v| v.to_string());
            match bson::from_document::<Trend>(raw) {
                Ok(trend) => Some(trend),
                Err(e) => {
                    warn!(error = %e, id = ?id, "skipping malformed trend document");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl TrendReader for MongoTrendReader {
    async fn top_by_category(&self, category: &str, limit: usize) -> anyhow::Result<Vec<Trend>> {
        let (filter, options) = top_trends_query(category, limit);
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .context("query trends")?;
        let docs: Vec<Document> = cursor.try_collect().await.context("read trends")?;
        Ok(decode_trends(docs))
    }
}
