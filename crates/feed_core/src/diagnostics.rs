//! Labels, analytics lines and synthetic models used by hosts for debugging
//! and for populating large lists.
use crate::checksum::checksum_str;
use crate::entity::CoreUser;
use crate::summary::{summaries_to_render_items, Summary};
use crate::view_state::{UiText, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    pub user: CoreUser,
    pub label: String,
}

pub fn user_item(user: CoreUser, index: usize) -> UserItem {
    let label = format!("User({}) idx={index}", user.id);
    UserItem { user, label }
}

/// A view state paired with a checksum over its header and error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBlock {
    pub state: ViewState,
    pub checksum: i32,
}

impl StateBlock {
    pub fn new(state: ViewState) -> Self {
        let text = format!("{}{}", state.header(), state.error_message().unwrap_or(""));
        Self {
            checksum: checksum_str(&text),
            state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub value: String,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn log_line(&self) -> String {
        format!("{}:{}", self.name, self.value)
    }
}

/// Loaded state with `count` synthetic rows; even positions are active.
pub fn large_model(count: usize) -> ViewState {
    let summaries: Vec<Summary> = (0..count)
        .map(|i| Summary {
            id: i as i64,
            name: format!("User-{i}"),
            checksum: (i as i32).wrapping_mul(17),
            is_active: i % 2 == 0,
        })
        .collect();

    ViewState::Loaded {
        header: UiText::new(format!("Large model {count}")),
        items: summaries_to_render_items(&summaries),
    }
}

/// `repeat` large models whose sizes cycle through 1..=20.
pub fn many_models(repeat: usize) -> Vec<ViewState> {
    (0..repeat).map(|i| large_model(i % 20 + 1)).collect()
}
