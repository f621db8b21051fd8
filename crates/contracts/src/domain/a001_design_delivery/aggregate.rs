use crate::enums::{GarmentType, Gender, UniformCategory};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID of a design delivery (the finished, produced set of garments of a design)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(pub Uuid);

impl DeliveryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// ID of a single delivery item, referenced by order lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeliveryItemId(pub Uuid);

impl DeliveryItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// One produced garment of a design delivery
///
/// Fabric, color, logo and images only identify the item for the user,
/// grouping and validation never look at them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignItem {
    pub delivery_item_id: DeliveryItemId,
    pub gender: Gender,
    pub category: UniformCategory,
    pub garment_type: GarmentType,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl DesignItem {
    /// Short caption, e.g. "Boys Regular Shirt"
    pub fn caption(&self) -> String {
        format!(
            "{} {} {}",
            self.gender.display_name(),
            self.category.display_name(),
            self.garment_type.display_name()
        )
    }
}

/// Design delivery as returned by `GET /api/design-deliveries/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDelivery {
    pub delivery_id: DeliveryId,
    pub design_id: String,
    pub design_name: String,
    #[serde(default)]
    pub items: Vec<DesignItem>,
}

/// Row of `GET /api/design-deliveries`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDeliverySummary {
    pub delivery_id: DeliveryId,
    pub design_id: String,
    pub design_name: String,
    pub item_count: usize,
    /// ISO datetime of the delivery
    pub delivered_at: Option<String>,
}

impl DesignDelivery {
    /// Decode the blob kept in browser session storage.
    ///
    /// The blob is written by the delivery picker and only read back here.
    pub fn from_session_blob(blob: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(blob).context("selected design blob is not a valid design delivery")
    }

    pub fn to_session_blob(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Caption of one of this delivery's items
    pub fn item_caption(&self, id: DeliveryItemId) -> Option<String> {
        self.items
            .iter()
            .find(|item| item.delivery_item_id == id)
            .map(DesignItem::caption)
    }
}
