use crate::shared::api_utils::{get_json, path_with_id, post_json};
use contracts::domain::a003_school_order::{CreateOrderRequest, CreateOrderResponse, SchoolOrderDto};

const API_PATH: &str = "/api/school-orders";

/// Submit an order; the caller keeps its form state on failure
pub async fn create_order(request: &CreateOrderRequest) -> Result<CreateOrderResponse, String> {
    post_json(API_PATH, request).await
}

pub async fn fetch_order(order_id: &str) -> Result<SchoolOrderDto, String> {
    get_json(&path_with_id(API_PATH, order_id)).await
}
