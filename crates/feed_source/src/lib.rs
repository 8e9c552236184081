//! Feed source: record sources, snapshots and the per-vertical service façade.
mod network;
mod repository;
mod service;
mod source;
mod types;

pub use network::{NetworkClient, NetworkRequest, NetworkResponse, StubNetworkClient};
pub use repository::{snapshot_checksum, Repository};
pub use service::FeedService;
pub use source::{InMemoryRecordSource, RecordSource};
pub use types::{PostDto, RawRecord, Snapshot, SourceError, UserDto};
