//! The admin action dispatcher and its two-step confirmation.
//!
//! # Architecture Note
//! Permanent delete is destructive with no undo path, so the type system
//! enforces the confirmation step: [`AdminDispatcher::dispatch`] only
//! accepts a [`ConfirmedAction`], and the sole way to obtain one is
//! [`PendingAction::confirm`]. Dropping the pending action cancels it. There
//! is no way to reach the mutation without passing through both steps.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::transport::Transport;

use super::error::AdminError;

/// The two administrative mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminKind {
    /// Flips the product's archive flag.
    ToggleArchive,
    /// Irreversibly removes the product.
    PermanentDelete,
}

/// An admin action that passed id validation but awaits user confirmation.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingAction {
    kind: AdminKind,
    id: i64,
}

impl PendingAction {
    pub fn kind(&self) -> AdminKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// The user said yes. Consumes the pending step.
    pub fn confirm(self) -> ConfirmedAction {
        ConfirmedAction {
            kind: self.kind,
            id: self.id,
        }
    }
}

/// Proof that the confirmation step happened.
///
/// Fields are private and there is no other constructor.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedAction {
    kind: AdminKind,
    id: i64,
}

impl ConfirmedAction {
    pub fn kind(&self) -> AdminKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

/// Issues archive/delete mutations.
pub struct AdminDispatcher {
    transport: Arc<dyn Transport>,
}

impl AdminDispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validates the raw id input and produces the pending step.
    pub fn prepare(&self, kind: AdminKind, id_text: &str) -> Result<PendingAction, AdminError> {
        let id = id_text.trim().parse::<i64>().map_err(|_| {
            AdminError::Validation("please enter a valid product id.".to_string())
        })?;
        Ok(PendingAction { kind, id })
    }

    /// Issues the confirmed mutation.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, action: ConfirmedAction) -> Result<(), AdminError> {
        match action.kind {
            AdminKind::ToggleArchive => {
                self.transport
                    .patch(&format!("/items/{}/archive", action.id), None)
                    .await?;
                info!(id = action.id, "archive flag toggled");
            }
            AdminKind::PermanentDelete => {
                self.transport
                    .delete(&format!("/items/{}", action.id))
                    .await?;
                info!(id = action.id, "product permanently deleted");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, MockTransport};
    use serde_json::{json, Value};

    #[test]
    fn prepare_rejects_non_integer_ids() {
        let dispatcher = AdminDispatcher::new(MockTransport::new());
        for text in ["", "abc", "1.5"] {
            assert!(matches!(
                dispatcher.prepare(AdminKind::PermanentDelete, text),
                Err(AdminError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn confirmed_toggle_patches_the_archive_route() {
        let mock = MockTransport::new();
        mock.expect_patch("/items/7/archive").return_json(json!({}));
        let dispatcher = AdminDispatcher::new(mock.clone());

        let pending = dispatcher.prepare(AdminKind::ToggleArchive, " 7 ").unwrap();
        dispatcher.dispatch(pending.confirm()).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.payload, None);
        mock.verify();
    }

    #[tokio::test]
    async fn confirmed_delete_hits_the_item_route() {
        let mock = MockTransport::new();
        mock.expect_delete("/items/7").return_status(204, Value::Null);
        let dispatcher = AdminDispatcher::new(mock.clone());

        let pending = dispatcher.prepare(AdminKind::PermanentDelete, "7").unwrap();
        dispatcher.dispatch(pending.confirm()).await.unwrap();

        assert_eq!(mock.requests()[0].method, Method::Delete);
        mock.verify();
    }

    #[tokio::test]
    async fn dropping_the_pending_action_issues_nothing() {
        let mock = MockTransport::new();
        let dispatcher = AdminDispatcher::new(mock.clone());

        let pending = dispatcher.prepare(AdminKind::PermanentDelete, "7").unwrap();
        drop(pending);

        assert!(mock.requests().is_empty());
        mock.verify();
    }
}
