use crate::result::ErrorInfo;

/// Represents the state of an operation run from the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryState {
    /// The operation had not been run.
    #[default]
    Idle,

    /// The operation is running.
    Loading,

    /// The operation finished with data.
    Ready,

    /// The operation failed.
    Failed(ErrorInfo),
}

impl QueryState {
    /// Returns `true` if the operation had not been run.
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    /// Returns `true` if the operation is running.
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Returns `true` if the operation finished with data.
    pub fn is_ready(&self) -> bool {
        matches!(self, QueryState::Ready)
    }

    /// Returns `true` if the operation failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
