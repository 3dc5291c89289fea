use thiserror::Error;

use crate::tree::NodeId;

/// Errors returned at the crate boundary.
///
/// The activation engine itself never fails: malformed input degrades to
/// "no visual change". Only caller mistakes surface here.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu items JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("menu items must be a JSON array")]
    NotASequence,
    #[error("{0} does not belong to this menu")]
    UnknownNode(NodeId),
}
