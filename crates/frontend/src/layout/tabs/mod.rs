//! Tab management
//!
//! - `page` - TabPage wrapper around tab content
//! - `registry` - tab.key → view
//! - `tab_labels` - tab titles and keys

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{order_detail_key, order_detail_label, order_detail_title, tab_label_for_key};
