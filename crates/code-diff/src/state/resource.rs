//! Resource lifecycle state

use crate::actions::SaveKind;
use chrono::{DateTime, Utc};
use code_diff_client::{DiffId, DiffResource};

/// Server-side metadata of the loaded diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMeta {
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&DiffResource> for ResourceMeta {
    fn from(resource: &DiffResource) -> Self {
        Self {
            is_active: resource.is_active,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceState {
    /// Diff whose content (or share) the editor currently reflects
    pub current: Option<DiffId>,
    /// Diff being read
    pub loading: Option<DiffId>,
    /// Bumped on every route entry and exit; results of older reads are stale
    pub load_generation: u64,
    pub saving: Option<SaveKind>,
    /// Link of the most recently shared diff
    pub share_link: Option<String>,
    pub meta: Option<ResourceMeta>,
}

impl ResourceState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }
}
