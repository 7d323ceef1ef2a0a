//! Dispatch error types.

use kidconnect_store::StoreError;
use std::fmt;
use thiserror::Error;

/// The collaborator call a run was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadRecipients,
    ReadSchedule,
    ReadDeliveryLog,
    AppendDeliveryLog,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadRecipients => "reading the recipient directory",
            Self::ReadSchedule => "reading scheduled content",
            Self::ReadDeliveryLog => "reading the delivery log",
            Self::AppendDeliveryLog => "appending to the delivery log",
        })
    }
}

/// Run-level failures.
///
/// Per-recipient problems never surface here; they are outcomes. A
/// collaborator failure abandons the run. Messages already sent and records
/// already appended stay as they are.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Dispatch aborted while {stage} ({sent_so_far} message(s) already sent): {source}")]
    Collaborator {
        stage: Stage,
        sent_so_far: usize,
        source: StoreError,
    },
}

impl DispatchError {
    pub(crate) fn collaborator(stage: Stage, sent_so_far: usize, source: StoreError) -> Self {
        Self::Collaborator {
            stage,
            sent_so_far,
            source,
        }
    }

    /// Messages accepted before the run aborted.
    pub fn sent_so_far(&self) -> usize {
        match self {
            Self::Collaborator { sent_so_far, .. } => *sent_so_far,
        }
    }

    /// Where the run failed.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Collaborator { stage, .. } => *stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_stage_and_progress() {
        let err = DispatchError::collaborator(
            Stage::AppendDeliveryLog,
            3,
            StoreError::unavailable("sheet quota exceeded"),
        );
        let message = err.to_string();
        assert!(message.contains("appending to the delivery log"));
        assert!(message.contains("3 message(s)"));
        assert!(message.contains("sheet quota exceeded"));
        assert_eq!(err.sent_so_far(), 3);
        assert_eq!(err.stage(), Stage::AppendDeliveryLog);
    }
}
