//! The dashboard controller: form state and the submit/clear/reload policy.
//!
//! This is the stateful half of the dashboard screen. It owns every input
//! field the original UI held, builds validated actions out of them, hands
//! the actions to the resolver or the admin dispatcher, and applies the
//! policy around the result: clear inputs and reload on success, preserve
//! inputs on failure, and always emit exactly one notice per attempt.

use std::sync::Arc;

use tracing::instrument;

use crate::admin::{AdminDispatcher, AdminError, AdminKind, ConfirmedAction, PendingAction};
use crate::inventory::{
    CategoryChoice, CategoryFilter, DonateForm, Inventory, InventoryError, Resolution, StockAction,
};
use crate::transport::Transport;

use super::notify::{Notice, Notifier};

/// The categories the donation picker offers out of the box.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Electronics", "Office Supplies", "Furniture", "Tools"];

/// Which transaction the action selector has picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Collect,
    Add,
    Donate,
}

/// Form state plus the services behind the dashboard screen.
pub struct DashboardController {
    inventory: Inventory,
    admin: AdminDispatcher,
    notifier: Arc<dyn Notifier>,

    action_kind: ActionKind,
    sku_input: String,
    quantity_input: String,
    product_name: String,
    description: String,
    is_new_category: bool,
    new_category_name: String,
    selected_category: String,
    admin_id_input: String,
    filter: CategoryFilter,
    categories: Vec<String>,
}

impl DashboardController {
    pub fn new(transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        let categories: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
        Self {
            inventory: Inventory::new(transport.clone()),
            admin: AdminDispatcher::new(transport),
            notifier,
            action_kind: ActionKind::Collect,
            sku_input: String::new(),
            quantity_input: "1".to_string(),
            product_name: String::new(),
            description: String::new(),
            is_new_category: false,
            new_category_name: String::new(),
            selected_category: categories[0].clone(),
            admin_id_input: String::new(),
            filter: CategoryFilter::All,
            categories,
        }
    }

    // --- Form state accessors -------------------------------------------

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn action_kind(&self) -> ActionKind {
        self.action_kind
    }

    pub fn set_action_kind(&mut self, kind: ActionKind) {
        self.action_kind = kind;
    }

    pub fn sku_input(&self) -> &str {
        &self.sku_input
    }

    pub fn set_sku_input(&mut self, value: impl Into<String>) {
        self.sku_input = value.into();
    }

    pub fn quantity_input(&self) -> &str {
        &self.quantity_input
    }

    pub fn set_quantity_input(&mut self, value: impl Into<String>) {
        self.quantity_input = value.into();
    }

    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.product_name = value.into();
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_new_category(&mut self, enabled: bool) {
        self.is_new_category = enabled;
    }

    pub fn is_new_category(&self) -> bool {
        self.is_new_category
    }

    pub fn set_new_category_name(&mut self, value: impl Into<String>) {
        self.new_category_name = value.into();
    }

    pub fn set_selected_category(&mut self, value: impl Into<String>) {
        self.selected_category = value.into();
    }

    pub fn set_admin_id_input(&mut self, value: impl Into<String>) {
        self.admin_id_input = value.into();
    }

    pub fn admin_id_input(&self) -> &str {
        &self.admin_id_input
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    // --- Snapshot loading -----------------------------------------------

    /// Reloads the snapshot under the current filter, notifying on failure.
    ///
    /// Success is silent; the table re-renders from the new snapshot.
    pub async fn refresh(&mut self) {
        if self.inventory.reload(&self.filter).await.is_err() {
            self.notifier.notify(Notice::error(
                "error",
                "failed to load inventory data.",
            ));
        }
    }

    /// Changes the category filter and reloads immediately.
    pub async fn apply_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.refresh().await;
    }

    // --- Stock transactions ---------------------------------------------

    /// Submits whichever action the selector has picked, from current inputs.
    #[instrument(skip(self), fields(kind = ?self.action_kind))]
    pub async fn submit_stock_action(&mut self) {
        let action = match self.build_action() {
            Ok(action) => action,
            Err(e) => {
                self.notifier.notify(self.stock_error_notice(&e));
                return;
            }
        };

        match self.inventory.resolve(action).await {
            Ok(resolution) => {
                let notice = Notice::success(
                    match resolution {
                        Resolution::Donated { .. } => "stock donated",
                        _ => "success",
                    },
                    resolution.message(),
                );
                self.clear_after(&resolution);
                self.notifier.notify(notice);
                self.refresh().await;
            }
            Err(e) => {
                // Inputs stay as they are so the user can correct them.
                self.notifier.notify(self.stock_error_notice(&e));
            }
        }
    }

    fn build_action(&self) -> Result<StockAction, InventoryError> {
        match self.action_kind {
            ActionKind::Collect => StockAction::collect(&self.sku_input),
            ActionKind::Add => StockAction::add_stock(&self.sku_input, &self.quantity_input),
            ActionKind::Donate => StockAction::donate(
                DonateForm {
                    name: self.product_name.clone(),
                    description: self.description.clone(),
                    category: if self.is_new_category {
                        CategoryChoice::New(self.new_category_name.clone())
                    } else {
                        CategoryChoice::Existing(self.selected_category.clone())
                    },
                },
                &self.categories,
            ),
        }
    }

    fn clear_after(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Collected { .. } => {
                self.sku_input.clear();
            }
            Resolution::Added { .. } => {
                self.sku_input.clear();
                self.quantity_input = "1".to_string();
            }
            Resolution::Donated { .. } => {
                self.product_name.clear();
                self.description.clear();
                self.new_category_name.clear();
                self.is_new_category = false;
            }
        }
    }

    fn stock_error_notice(&self, err: &InventoryError) -> Notice {
        match err {
            InventoryError::Validation(message) => Notice::error("input required", message),
            InventoryError::NotFound(_) => Notice::error("not found", err.to_string()),
            InventoryError::OutOfStock { .. } => Notice::error("stock error", err.to_string()),
            InventoryError::CategoryExists(_) => Notice::error(
                "category exists",
                "this category already exists. please select it from the dropdown or enter a truly new name.",
            ),
            InventoryError::Transport(transport) => match self.action_kind {
                ActionKind::Donate => Notice::error(
                    "error",
                    transport
                        .detail()
                        .unwrap_or("failed to complete donation. check input data.")
                        .to_string(),
                ),
                ActionKind::Collect => Notice::error(
                    "error",
                    "failed to process stock collect. check sku or server connection.",
                ),
                ActionKind::Add => Notice::error(
                    "error",
                    "failed to process stock add. check sku or server connection.",
                ),
            },
        }
    }

    // --- Admin actions --------------------------------------------------

    /// First step: validate the id input and produce the pending action.
    ///
    /// Returns `None` after notifying when the id does not parse. The caller
    /// shows the confirmation prompt and either confirms or drops the result.
    pub fn request_admin_action(&self, kind: AdminKind) -> Option<PendingAction> {
        match self.admin.prepare(kind, &self.admin_id_input) {
            Ok(pending) => Some(pending),
            Err(AdminError::Validation(message)) => {
                self.notifier.notify(Notice::error("input required", message));
                None
            }
            // prepare only validates; transport errors cannot happen here.
            Err(AdminError::Transport(e)) => {
                self.notifier.notify(Notice::error("error", e.to_string()));
                None
            }
        }
    }

    /// The confirmation prompt body for a pending action.
    ///
    /// Archive prompts mention the product's current status when the id is
    /// in the snapshot.
    pub fn confirmation_message(&self, pending: &PendingAction) -> String {
        let id = pending.id();
        match pending.kind() {
            AdminKind::PermanentDelete => format!(
                "are you sure you want to permanently delete product id {id}? this action cannot be undone."
            ),
            AdminKind::ToggleArchive => {
                let status = match self.inventory.snapshot().find_by_id(id) {
                    Some(p) if p.is_archived => "archived",
                    Some(_) => "active",
                    None => "unknown",
                };
                format!(
                    "are you sure you want to toggle archive for product id {id}?\n(current status: {status})"
                )
            }
        }
    }

    /// Second step: dispatch a confirmed action, then clear and reload.
    pub async fn confirm_admin_action(&mut self, confirmed: ConfirmedAction) {
        let kind = confirmed.kind();
        let id = confirmed.id();

        match self.admin.dispatch(confirmed).await {
            Ok(()) => {
                self.admin_id_input.clear();
                let message = match kind {
                    AdminKind::ToggleArchive => {
                        format!("archive status toggled for product id {id}.")
                    }
                    AdminKind::PermanentDelete => {
                        format!("product id {id} successfully deleted.")
                    }
                };
                self.notifier.notify(Notice::success("success", message));
                self.refresh().await;
            }
            Err(_) => {
                let message = match kind {
                    AdminKind::ToggleArchive => "failed to toggle archive status.",
                    AdminKind::PermanentDelete => "failed to permanently delete product.",
                };
                self.notifier.notify(Notice::error("error", message));
            }
        }
    }
}
