use crate::entity::FeedEntity;
use crate::summary::{activity_label, project, Summary};

/// Positional id assigned during assembly, independent of the entity id.
pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: ItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub user_summary: Summary,
}

/// Builds one display item per entity, numbering them from 0 in input order.
pub fn assemble<E: FeedEntity>(entities: &[E]) -> Vec<DisplayItem> {
    entities
        .iter()
        .zip(0..)
        .map(|(entity, id)| {
            let summary = project(entity);
            DisplayItem {
                id,
                title: format!("User {}", summary.name),
                subtitle: Some(activity_label(summary.is_active).to_owned()),
                user_summary: summary,
            }
        })
        .collect()
}
