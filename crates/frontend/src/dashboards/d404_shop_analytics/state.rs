use super::api::ApiError;
use super::loader::DashboardData;
use std::borrow::Cow;

/// Lifecycle of the one-shot dashboard load.
///
/// Starts as `Pending` and leaves it exactly once, through [`LoadPhase::from_result`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Pending,
    Ready(DashboardData),
    Failed(String),
}

impl LoadPhase {
    pub fn from_result(result: Result<DashboardData, ApiError>) -> Self {
        match result {
            Ok(data) => LoadPhase::Ready(data),
            Err(e) => LoadPhase::Failed(e.to_string()),
        }
    }

    /// True while the joint fetch has not settled
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Pending)
    }

    /// Loaded data, or the pre-fetch defaults when nothing was loaded
    pub fn data(&self) -> Cow<'_, DashboardData> {
        match self {
            LoadPhase::Ready(data) => Cow::Borrowed(data),
            _ => Cow::Owned(DashboardData::default()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
