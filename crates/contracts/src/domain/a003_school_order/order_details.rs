use super::bundle::{BundleKey, UniformBundle};
use super::dto::OrderDetailLine;
use super::quantity::OrderQuantities;
use crate::domain::a002_size_catalog::SizeCatalog;
use std::collections::BTreeMap;

/// Expand bundle/size quantities into order lines of concrete delivery items.
///
/// Ordering a bundle in size M orders every populated slot of the bundle in
/// that size. Sizes are translated to catalog codes. A slot whose garment is
/// catalogued without that size gets no line; a garment missing from the
/// catalog keeps the raw label. Cells of bundles that no longer exist are
/// skipped.
pub fn format_order_details(
    bundles: &BTreeMap<BundleKey, UniformBundle>,
    quantities: &OrderQuantities,
    catalog: &SizeCatalog,
) -> Vec<OrderDetailLine> {
    let mut lines = Vec::new();

    for (key, quantity) in quantities.iter() {
        let Some(bundle) = bundles.get(&key.bundle) else {
            continue;
        };
        for item in bundle.items() {
            let Some(size) = catalog.order_size(item.garment_type, item.gender, &key.size_label) else {
                continue;
            };
            lines.push(OrderDetailLine {
                delivery_item_id: item.delivery_item_id,
                size,
                quantity,
            });
        }
    }

    lines
}
