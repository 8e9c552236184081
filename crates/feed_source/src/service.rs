use feed_core::{assemble, sequential_users, CoreUser, VerticalConfig, ViewMapper, ViewState};
use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::{NetworkClient, NetworkRequest, RecordSource, Repository};

/// Entry point of one feed vertical.
///
/// Owns no state between calls; every call returns a fresh [`ViewState`] and
/// source failures never escape as errors.
#[derive(Debug, Clone)]
pub struct FeedService<S, N> {
    repository: Repository<S>,
    mapper: ViewMapper,
    network: N,
    config: VerticalConfig,
}

impl<S: RecordSource, N: NetworkClient> FeedService<S, N> {
    pub fn new(source: S, network: N, config: VerticalConfig) -> Self {
        Self {
            repository: Repository::new(source, &config),
            mapper: ViewMapper::for_vertical(&config),
            network,
            config,
        }
    }

    pub fn config(&self) -> &VerticalConfig {
        &self.config
    }

    /// Builds the feed for the user stored under `key`.
    pub fn run(&self, key: i64) -> ViewState {
        feed_debug!("[{}] building feed for key {}", self.config.name, key);

        let snapshot = match self.repository.load_snapshot(key) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return ViewState::empty(),
            Err(err) => {
                feed_warn!("[{}] record source failed for key {}: {}", self.config.name, key, err);
                return ViewState::error(err.to_string());
            }
        };

        if self.config.enable_logging {
            feed_debug!(
                "[{}] snapshot for key {}: {} posts, hash {}",
                self.config.name,
                key,
                snapshot.posts.len(),
                snapshot.raw_hash
            );
        }

        let Some(user) = snapshot.users.first() else {
            return ViewState::empty();
        };
        let items = assemble(&[CoreUser::from(user)]);
        self.mapper.present(&items)
    }

    /// Builds a feed of `count` synthetic users without consulting the source.
    pub fn demo(&self, count: usize) -> ViewState {
        feed_info!("[{}] building demo feed with {} users", self.config.name, count);
        self.mapper.present(&assemble(&sequential_users(count)))
    }

    /// Issues a GET for `path` and returns the response code.
    pub fn ping(&self, path: &str) -> u16 {
        let response = self.network.execute(&NetworkRequest::get(path));
        feed_debug!("[{}] ping {} -> {}", self.config.name, path, response.code);
        response.code
    }
}
