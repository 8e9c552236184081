use crate::checksum::checksum_str;
use crate::entity::FeedEntity;
use crate::view_state::{RenderItem, UiText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub checksum: i32,
    pub is_active: bool,
}

/// Lightweight label projection of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub id: i64,
    pub label: String,
    pub active: bool,
}

/// Projects an entity to its summary. The checksum covers the name only.
pub fn project<E: FeedEntity + ?Sized>(entity: &E) -> Summary {
    Summary {
        id: entity.id(),
        name: entity.name().to_owned(),
        checksum: checksum_str(entity.name()),
        is_active: entity.is_active(),
    }
}

pub fn summarize_all<E: FeedEntity>(entities: &[E]) -> Vec<Summary> {
    entities.iter().map(project).collect()
}

pub fn project_all<E: FeedEntity>(entities: &[E]) -> Vec<Projection> {
    entities
        .iter()
        .map(|entity| Projection {
            id: entity.id(),
            label: entity.name().to_owned(),
            active: entity.is_active(),
        })
        .collect()
}

/// Maps summaries straight to render items, skipping the feed stage.
///
/// Ids are positional and titles are the bare names, without numbering.
pub fn summaries_to_render_items(summaries: &[Summary]) -> Vec<RenderItem> {
    summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| RenderItem {
            id: index as u64,
            title: summary.name.clone(),
            subtitle: Some(activity_label(summary.is_active).to_owned()),
            selected: summary.is_active,
        })
        .collect()
}

pub fn ui_text_list<E: FeedEntity>(entities: &[E]) -> Vec<UiText> {
    entities
        .iter()
        .map(|entity| UiText::new(format!("User: {}", entity.name())))
        .collect()
}

pub(crate) fn activity_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}
