use crate::model::{Row, RowId};
use thiserror::Error as ThisError;

///
/// RenderError
///
/// Failure to materialize one member row. A value, not an unwind: the
/// builder decides by policy whether a failed member is skipped or the
/// whole build aborts.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("render failed for row {id}: {message}")]
pub struct RenderError {
    pub id: RowId,
    pub message: String,
}

impl RenderError {
    pub fn new(id: RowId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

///
/// Renderer
///
/// Host-provided materialization of one grouped row in the context of its
/// anchor. The unit type is opaque to this crate; groups simply carry it.
///

pub trait Renderer {
    type Unit;

    fn render(&self, row: &Row, anchor: &Row) -> Result<Self::Unit, RenderError>;
}
