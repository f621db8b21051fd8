//! School order creation: uniform bundles, quantity grid and validation

pub mod bundle;
pub mod dto;
pub mod form;
pub mod order_details;
pub mod quantity;
pub mod validation;

pub use bundle::{group_items, BundleKey, BundleKind, UniformBundle};
pub use dto::{
    CreateOrderRequest, CreateOrderResponse, OrderDetailLine, SchoolOrderDto, SchoolOrderLineDto,
};
pub use form::OrderForm;
pub use order_details::format_order_details;
pub use quantity::{total_quantity, OrderQuantities, QuantityKey};
pub use validation::{validate, FieldKey, ValidationResult, MIN_ORDER_QUANTITY};
