//! Tab labels, one place for every tab key

pub const DESIGN_DELIVERY_LIST: &str = "a001_design_delivery";
pub const SCHOOL_ORDER_NEW: &str = "a003_school_order_new";
pub const SCHOOL_ORDER_DETAIL_PREFIX: &str = "a003_school_order_detail_";

/// Readable tab title for a key; unknown keys fall back to the key itself
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        DESIGN_DELIVERY_LIST => "Design deliveries",
        SCHOOL_ORDER_NEW => "New order",
        k if k.starts_with(SCHOOL_ORDER_DETAIL_PREFIX) => "Order",
        other => other,
    }
}

pub fn order_detail_key(order_id: &str) -> String {
    format!("{}{}", SCHOOL_ORDER_DETAIL_PREFIX, order_id)
}

/// Title of an order details tab, e.g. "Order 1f3c…"
pub fn order_detail_label(order_id: &str) -> String {
    let short: String = order_id.chars().take(8).collect();
    if short.len() < order_id.len() {
        format!("Order {}…", short)
    } else {
        format!("Order {}", short)
    }
}

/// Title once the order is loaded: the design it was placed for
pub fn order_detail_title(order_id: &str, design_name: Option<&str>) -> String {
    match design_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Order: {}", name),
        None => order_detail_label(order_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(SCHOOL_ORDER_NEW), "New order");
        assert_eq!(tab_label_for_key(&order_detail_key("17")), "Order");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }

    #[test]
    fn test_order_detail_label_shortens_long_ids() {
        assert_eq!(order_detail_label("42"), "Order 42");
        assert_eq!(
            order_detail_label("1f3c9a2b-0000-4000-8000-000000000000"),
            "Order 1f3c9a2b…"
        );
    }

    #[test]
    fn test_order_detail_title_prefers_design_name() {
        assert_eq!(order_detail_title("42", Some("Autumn 2026")), "Order: Autumn 2026");
        assert_eq!(order_detail_title("42", Some("  ")), "Order 42");
        assert_eq!(order_detail_title("42", None), "Order 42");
    }
}
