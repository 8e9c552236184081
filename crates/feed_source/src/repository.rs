use feed_core::{Checksum, VerticalConfig, CHECKSUM_SEED};

use crate::{PostDto, RecordSource, Snapshot, SourceError, UserDto};

/// Hash over the user and every fetched post, in fetch order.
pub fn snapshot_checksum(user: &UserDto, posts: &[PostDto]) -> i32 {
    posts
        .iter()
        .fold(
            Checksum::new(CHECKSUM_SEED).field(&user.id).field(&user.name),
            |acc, post| acc.field(&post.id).field(&post.title),
        )
        .finish()
}

/// Loads snapshots for one vertical from an injected record source.
#[derive(Debug, Clone)]
pub struct Repository<S> {
    source: S,
    page_size: usize,
}

impl<S: RecordSource> Repository<S> {
    pub fn new(source: S, config: &VerticalConfig) -> Self {
        Self {
            source,
            page_size: config.page_size,
        }
    }

    /// `Ok(None)` when the source has no record for `key`.
    pub fn load_snapshot(&self, key: i64) -> Result<Option<Snapshot>, SourceError> {
        let record = match self.source.fetch(key, self.page_size) {
            Ok(Some(record)) => record,
            Ok(None) | Err(SourceError::NotFound { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };

        let raw_hash = snapshot_checksum(&record.user, &record.posts);
        Ok(Some(Snapshot {
            users: vec![record.user],
            posts: record.posts,
            raw_hash,
        }))
    }
}
