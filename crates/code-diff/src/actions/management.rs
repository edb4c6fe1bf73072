//! Account diff management actions

use code_diff_client::{ClientError, DiffId, DiffPage, DiffResource};

#[derive(Debug, Clone)]
pub enum ManagementAction {
    Open,
    LoadPage(u32),
    PageLoaded { page: u32, data: DiffPage },
    PageFailed(ClientError),
    NextPage,
    PrevPage,
    SelectNext,
    SelectPrev,
    SetQuery(String),
    ToggleSelected,
    DeleteSelected,
    OpenSelected,
    Toggled(DiffResource),
    Deleted(DiffId),
    MutationFailed(ClientError),
}
