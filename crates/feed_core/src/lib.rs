//! Feed core: pure snapshot-to-view pipeline.
//!
//! Entities are projected to summaries, assembled into display items and
//! mapped to a [`ViewState`]. Nothing here performs I/O or fails.
mod checksum;
mod config;
mod diagnostics;
mod entity;
mod feed;
mod summary;
mod view_state;

pub use checksum::{checksum_str, combine, Checksum, StableHash, CHECKSUM_SEED};
pub use config::VerticalConfig;
pub use diagnostics::{
    large_model, many_models, user_item, AnalyticsEvent, StateBlock, UserItem,
};
pub use entity::{sequential_users, CoreUser, FeedEntity};
pub use feed::{assemble, DisplayItem, ItemId};
pub use summary::{
    project, project_all, summaries_to_render_items, summarize_all, ui_text_list, Projection,
    Summary,
};
pub use view_state::{present, RenderItem, RenderTarget, UiText, ViewMapper, ViewState};
