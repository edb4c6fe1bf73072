//! Resource lifecycle actions

use code_diff_client::{ClientError, DiffId, DiffResource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Share,
    Update,
}

#[derive(Debug, Clone)]
pub enum ResourceAction {
    /// Start loading a diff (route entry)
    Open(DiffId),
    /// A read finished
    Fetched {
        generation: u64,
        /// Local edit revision when the read was issued
        revision: u64,
        resource: DiffResource,
    },
    LoadFailed {
        generation: u64,
        /// Local edit revision when the read was issued
        revision: u64,
        id: DiffId,
        error: ClientError,
    },
    /// Delayed return to the home route after a diff was not found
    RedirectHome {
        /// Local edit revision when the failed read was issued
        revision: u64,
    },
    /// Leave the diff route; any in-flight read is abandoned
    Leave,
    Share,
    Update,
    SaveStarted(SaveKind),
    Created(DiffResource),
    Updated(DiffResource),
    SaveFailed { kind: SaveKind, error: ClientError },
    OpenShareLink,
}
