use crate::domain::a001_design_delivery::{DeliveryId, DeliveryItemId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Line of an order: one delivery item in one size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetailLine {
    pub delivery_item_id: DeliveryItemId,
    /// Size code from the size catalog (raw label when the catalog has none)
    pub size: String,
    pub quantity: u32,
}

/// Body of `POST /api/school-orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub delivery_id: DeliveryId,
    pub deadline: NaiveDate,
    pub note: Option<String>,
    pub order_details: Vec<OrderDetailLine>,
}

impl CreateOrderRequest {
    pub fn total_quantity(&self) -> u64 {
        self.order_details.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
}

/// Order line as returned with a placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolOrderLineDto {
    pub delivery_item_id: DeliveryItemId,
    pub size: String,
    pub quantity: u32,
    /// Caption of the delivery item, e.g. "Boys Regular Shirt"
    #[serde(default)]
    pub item_caption: Option<String>,
}

/// Placed order (`GET /api/school-orders/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolOrderDto {
    pub order_id: String,
    pub delivery_id: DeliveryId,
    #[serde(default)]
    pub design_name: Option<String>,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    pub status: String,
    /// ISO datetime
    pub created_at: String,
    #[serde(default)]
    pub order_details: Vec<SchoolOrderLineDto>,
}

impl SchoolOrderDto {
    pub fn total_quantity(&self) -> u64 {
        self.order_details.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
