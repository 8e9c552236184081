use serde::{Deserialize, Serialize};

/// Capability set a domain entity needs to flow through the feed pipeline.
pub trait FeedEntity {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreUser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl CoreUser {
    pub fn new(id: i64, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            is_active,
        }
    }
}

impl FeedEntity for CoreUser {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl<T: FeedEntity + ?Sized> FeedEntity for &T {
    fn id(&self) -> i64 {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// Deterministic users `User-0 .. User-{count-1}`; every third one (from 0) is inactive.
pub fn sequential_users(count: usize) -> Vec<CoreUser> {
    (0..count)
        .map(|i| CoreUser::new(i as i64, format!("User-{i}"), i % 3 != 0))
        .collect()
}
