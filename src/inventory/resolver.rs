//! The snapshot loader and transaction resolver service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::model::ProductRecord;
use crate::transport::{Payload, Transport, TransportError};

use super::actions::StockAction;
use super::error::InventoryError;
use super::sku;
use super::snapshot::{CategoryFilter, Snapshot};

/// What a successfully resolved action did, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Collected { name: String, remaining: u32 },
    Added { name: String, added: u32, new_stock: u32 },
    Donated { name: String, sku: String, category: String },
}

impl Resolution {
    /// The success message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Resolution::Collected { name, remaining } => format!(
                "1 unit of {name} collected successfully! remaining stock: {remaining}."
            ),
            Resolution::Added {
                name,
                added,
                new_stock,
            } => format!("{added} units added to {name} successfully! new stock: {new_stock}."),
            Resolution::Donated {
                name,
                sku,
                category,
            } => format!("new product created:\nname: {name}\nsku: {sku}\ncategory: {category}"),
        }
    }
}

/// Holds the snapshot and resolves stock actions against it.
///
/// One instance per dashboard. All mutation requests go through
/// [`Inventory::resolve`]; all fetches go through [`Inventory::reload`].
/// Nothing here retries: a failed call surfaces once and the action is over.
pub struct Inventory {
    transport: Arc<dyn Transport>,
    snapshot: Snapshot,
    loading: bool,
}

impl Inventory {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            snapshot: Snapshot::default(),
            loading: false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// True while a reload is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches the active product list and swaps it in.
    ///
    /// The loading flag clears on both paths. On failure the previous
    /// snapshot stays intact, no partial overwrite.
    #[instrument(skip(self))]
    pub async fn reload(&mut self, filter: &CategoryFilter) -> Result<(), InventoryError> {
        self.loading = true;
        let fetched = self.fetch(filter).await;
        self.loading = false;

        match fetched {
            Ok(products) => {
                debug!(count = products.len(), "snapshot replaced");
                self.snapshot.replace(products);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "snapshot reload failed, keeping previous list");
                Err(e)
            }
        }
    }

    async fn fetch(&self, filter: &CategoryFilter) -> Result<Vec<crate::model::Product>, InventoryError> {
        let mut query: Vec<(&str, &str)> = vec![("is_archived", "false")];
        if let CategoryFilter::Category(category) = filter {
            query.push(("category", category.as_str()));
        }

        let response = self.transport.get("/items/", &query).await?;
        let records: Vec<ProductRecord> = serde_json::from_value(response.body)
            .map_err(|e| TransportError::Network(format!("malformed inventory payload: {e}")))?;
        Ok(records.into_iter().map(ProductRecord::normalize).collect())
    }

    /// Resolves a validated action into exactly one mutation request.
    ///
    /// Snapshot preconditions (sku lookup, stock floor and ceiling) are
    /// checked first;
    /// when they fail, no request is issued. On transport failure nothing is
    /// rolled back because local state was never advanced.
    #[instrument(skip(self))]
    pub async fn resolve(&mut self, action: StockAction) -> Result<Resolution, InventoryError> {
        match action {
            StockAction::Collect { sku } => {
                let product = self
                    .snapshot
                    .find_by_sku(&sku)
                    .ok_or(InventoryError::NotFound(sku))?
                    .clone();
                if product.stock == 0 {
                    return Err(InventoryError::OutOfStock { name: product.name });
                }
                let new_stock = product.stock - 1;
                self.patch_quantity(product.id, new_stock).await?;
                Ok(Resolution::Collected {
                    name: product.name,
                    remaining: new_stock,
                })
            }
            StockAction::AddStock { sku, quantity } => {
                let product = self
                    .snapshot
                    .find_by_sku(&sku)
                    .ok_or(InventoryError::NotFound(sku))?
                    .clone();
                let new_stock = product.stock.checked_add(quantity).ok_or_else(|| {
                    InventoryError::Validation(
                        "the resulting stock level is too large.".to_string(),
                    )
                })?;
                self.patch_quantity(product.id, new_stock).await?;
                Ok(Resolution::Added {
                    name: product.name,
                    added: quantity,
                    new_stock,
                })
            }
            StockAction::Donate {
                name,
                category,
                description,
            } => {
                let sku = sku::unique_sku(&category, &self.snapshot);
                let body = json!({
                    "name": name,
                    "category": category,
                    "description": description,
                    "sku": sku,
                    "quantity": 1,
                    "is_archived": false,
                });
                self.transport.post("/items/", Payload::Json(body)).await?;
                Ok(Resolution::Donated {
                    name,
                    sku,
                    category,
                })
            }
        }
    }

    async fn patch_quantity(&self, id: i64, quantity: u32) -> Result<(), InventoryError> {
        debug!(id, quantity, "patching stock level");
        self.transport
            .patch(&format!("/items/{id}"), Some(json!({ "quantity": quantity })))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, MockTransport};
    use serde_json::json;

    fn seeded_inventory(mock: &Arc<MockTransport>) -> Inventory {
        let mut inventory = Inventory::new(mock.clone());
        inventory.snapshot.replace(
            vec![json!({
                "id": 1, "sku": "TOOL-00042", "name": "Hammer",
                "category": "Tools", "quantity": 3
            })]
            .into_iter()
            .map(|v| serde_json::from_value::<ProductRecord>(v).unwrap().normalize())
            .collect(),
        );
        inventory
    }

    #[tokio::test]
    async fn collect_decrements_by_one() {
        let mock = MockTransport::new();
        mock.expect_patch("/items/1").return_json(json!({}));
        let mut inventory = seeded_inventory(&mock);

        let resolution = inventory
            .resolve(StockAction::collect("tool-00042").unwrap())
            .await
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Collected {
                name: "Hammer".to_string(),
                remaining: 2
            }
        );
        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(
            requests[0].payload,
            Some(Payload::Json(json!({ "quantity": 2 })))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn collect_out_of_stock_issues_no_request() {
        let mock = MockTransport::new();
        let mut inventory = Inventory::new(mock.clone());
        inventory.snapshot.replace(vec![ProductRecord {
            id: 9,
            sku: "ELEC-00001".to_string(),
            name: "Cable".to_string(),
            category: "Electronics".to_string(),
            description: String::new(),
            quantity: Some(0),
            stock: None,
            is_archived: false,
        }
        .normalize()]);

        let err = inventory
            .resolve(StockAction::collect("ELEC-00001").unwrap())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InventoryError::OutOfStock {
                name: "Cable".to_string()
            }
        );
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn add_stock_patches_the_sum() {
        let mock = MockTransport::new();
        mock.expect_patch("/items/1").return_json(json!({}));
        let mut inventory = seeded_inventory(&mock);

        let resolution = inventory
            .resolve(StockAction::add_stock("TOOL-00042", "5").unwrap())
            .await
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Added {
                name: "Hammer".to_string(),
                added: 5,
                new_stock: 8
            }
        );
        assert_eq!(
            mock.requests()[0].payload,
            Some(Payload::Json(json!({ "quantity": 8 })))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn add_stock_overflow_issues_no_request() {
        let mock = MockTransport::new();
        let mut inventory = seeded_inventory(&mock);

        // Snapshot stock is 3, so adding u32::MAX would exceed the stock type.
        let action = StockAction::add_stock("TOOL-00042", &u32::MAX.to_string()).unwrap();
        let err = inventory.resolve(action).await.unwrap_err();

        assert!(matches!(err, InventoryError::Validation(_)));
        assert!(mock.requests().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_sku_issues_no_request() {
        let mock = MockTransport::new();
        let mut inventory = seeded_inventory(&mock);

        let err = inventory
            .resolve(StockAction::collect("NOPE-00000").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err, InventoryError::NotFound("NOPE-00000".to_string()));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn donate_posts_a_new_product_with_stock_one() {
        let mock = MockTransport::new();
        mock.expect_post("/items/").return_status(201, json!({}));
        let mut inventory = seeded_inventory(&mock);

        let action = StockAction::Donate {
            name: "Drill".to_string(),
            category: "Power Tools".to_string(),
            description: "cordless".to_string(),
        };
        let resolution = inventory.resolve(action).await.unwrap();

        let (sku, category) = match &resolution {
            Resolution::Donated { sku, category, .. } => (sku.clone(), category.clone()),
            other => panic!("unexpected resolution: {other:?}"),
        };
        assert_eq!(category, "Power Tools");
        assert!(sku.starts_with("POWE-"));

        let payload = match &mock.requests()[0].payload {
            Some(Payload::Json(v)) => v.clone(),
            other => panic!("unexpected payload: {other:?}"),
        };
        assert_eq!(payload["quantity"], 1);
        assert_eq!(payload["is_archived"], false);
        assert_eq!(payload["sku"], sku);
        mock.verify();
    }

    #[tokio::test]
    async fn reload_keeps_previous_snapshot_on_failure() {
        let mock = MockTransport::new();
        mock.expect_get("/items/").return_network_err("connection refused");
        let mut inventory = seeded_inventory(&mock);

        let err = inventory.reload(&CategoryFilter::All).await.unwrap_err();
        assert!(matches!(err, InventoryError::Transport(_)));
        assert_eq!(inventory.snapshot().len(), 1);
        assert!(!inventory.is_loading());
    }

    #[tokio::test]
    async fn reload_sends_category_and_archived_filters() {
        let mock = MockTransport::new();
        mock.expect_get("/items/").return_json(json!([
            {"id": 2, "sku": "FURN-00001", "name": "Desk", "category": "Furniture", "stock": 4}
        ]));
        let mut inventory = Inventory::new(mock.clone());

        inventory
            .reload(&CategoryFilter::Category("Furniture".to_string()))
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(
            request.query,
            vec![
                ("is_archived".to_string(), "false".to_string()),
                ("category".to_string(), "Furniture".to_string()),
            ]
        );
        assert_eq!(inventory.snapshot().len(), 1);
        assert_eq!(inventory.snapshot().products()[0].stock, 4);
        mock.verify();
    }
}
