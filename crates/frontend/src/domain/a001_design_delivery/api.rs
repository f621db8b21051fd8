use crate::shared::api_utils::{get_json, path_with_id};
use contracts::domain::a001_design_delivery::{DeliveryId, DesignDelivery, DesignDeliverySummary};

const API_PATH: &str = "/api/design-deliveries";

/// Finished designs the school can order against
pub async fn list_deliveries() -> Result<Vec<DesignDeliverySummary>, String> {
    get_json(API_PATH).await
}

/// Delivery with all its items
pub async fn fetch_delivery(id: DeliveryId) -> Result<DesignDelivery, String> {
    get_json(&path_with_id(API_PATH, &id.as_string())).await
}
