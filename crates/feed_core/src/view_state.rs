use std::fmt;

use crate::config::VerticalConfig;
use crate::feed::{DisplayItem, ItemId};

pub const EMPTY_HEADER: &str = "No data";
pub const LOADING_HEADER: &str = "Loading...";
pub const ERROR_HEADER: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiText(String);

impl UiText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub id: ItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

/// What a feed screen shows. The variants cannot carry contradictory fields,
/// e.g. a loading flag next to populated items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loaded { header: UiText, items: Vec<RenderItem> },
    Empty,
    Loading,
    Error { message: String },
}

impl ViewState {
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn loading() -> Self {
        Self::Loading
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn header(&self) -> &str {
        match self {
            Self::Loaded { header, .. } => header.as_str(),
            Self::Empty => EMPTY_HEADER,
            Self::Loading => LOADING_HEADER,
            Self::Error { .. } => ERROR_HEADER,
        }
    }

    pub fn items(&self) -> &[RenderItem] {
        match self {
            Self::Loaded { items, .. } => items,
            Self::Empty | Self::Loading | Self::Error { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Consumer of finished view states, e.g. a terminal or a list widget.
pub trait RenderTarget {
    type Error;

    fn render(&mut self, state: &ViewState) -> Result<(), Self::Error>;
}

/// Maps assembled display items to the loaded view state of one vertical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewMapper {
    header_prefix: Option<String>,
}

impl ViewMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_vertical(config: &VerticalConfig) -> Self {
        Self {
            header_prefix: config.header_prefix.clone(),
        }
    }

    /// Loaded state; titles are numbered from 1 regardless of item ids.
    pub fn present(&self, items: &[DisplayItem]) -> ViewState {
        let header = match &self.header_prefix {
            Some(prefix) => format!("{prefix} Feed ({})", items.len()),
            None => format!("Feed ({})", items.len()),
        };
        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| RenderItem {
                id: item.id,
                title: format!("{}. {}", index + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.user_summary.is_active,
            })
            .collect();

        ViewState::Loaded {
            header: UiText::new(header),
            items,
        }
    }
}

/// [`ViewMapper::present`] without a header prefix.
pub fn present(items: &[DisplayItem]) -> ViewState {
    ViewMapper::new().present(items)
}
