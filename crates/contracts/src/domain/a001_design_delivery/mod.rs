pub mod aggregate;

pub use aggregate::{DeliveryId, DeliveryItemId, DesignDelivery, DesignDeliverySummary, DesignItem};
