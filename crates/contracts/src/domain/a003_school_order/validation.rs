//! Order quantity validation
//!
//! Rules are evaluated independently and every failure is collected:
//! - a delivery deadline must be set;
//! - at least one item must be selected, and the order only becomes
//!   submittable from [`MIN_ORDER_QUANTITY`] items;
//! - every bundle needs at least one unit across its sizes.

use super::bundle::{BundleKey, UniformBundle};
use super::quantity::OrderQuantities;
use std::collections::BTreeMap;

/// Minimum number of items in one order
pub const MIN_ORDER_QUANTITY: u64 = 50;

/// Form field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Deadline,
    Quantity,
    Uniform(BundleKey),
}

impl FieldKey {
    /// Field name: "deadline", "quantity" or "uniform_<bundle key>"
    pub fn name(&self) -> String {
        match self {
            FieldKey::Deadline => "deadline".to_string(),
            FieldKey::Quantity => "quantity".to_string(),
            FieldKey::Uniform(key) => format!("uniform_{}", key.as_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub field_errors: BTreeMap<FieldKey, String>,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn error(&self, field: &FieldKey) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Bundle-level errors only
    pub fn bundle_errors(&self) -> impl Iterator<Item = (&BundleKey, &str)> {
        self.field_errors.iter().filter_map(|(field, msg)| match field {
            FieldKey::Uniform(key) => Some((key, msg.as_str())),
            _ => None,
        })
    }
}

pub fn deadline_error(deadline_set: bool) -> Option<String> {
    if deadline_set {
        None
    } else {
        Some("Please select a delivery deadline".to_string())
    }
}

/// Error for the order total, `None` once the minimum is reached
pub fn quantity_error(total: u64) -> Option<String> {
    if total == 0 {
        Some("Please select at least 1 item".to_string())
    } else if total < MIN_ORDER_QUANTITY {
        Some(format!(
            "Minimum order is {} items, need {} more",
            MIN_ORDER_QUANTITY,
            MIN_ORDER_QUANTITY - total
        ))
    } else {
        None
    }
}

/// Error for one bundle, `None` when it has at least one unit
pub fn bundle_error(bundle: &UniformBundle, quantities: &OrderQuantities) -> Option<String> {
    if quantities.bundle_total(&bundle.key) >= 1 {
        return None;
    }
    let garment = bundle
        .primary_garment()
        .map(|g| g.display_name())
        .unwrap_or("uniform");
    Some(format!(
        "Please enter a quantity for {} {} {}",
        bundle.key.gender.display_name(),
        bundle.key.category.display_name(),
        garment
    ))
}

/// True when every bundle has at least one unit and the minimum is reached
pub fn quantities_satisfied(
    bundles: &BTreeMap<BundleKey, UniformBundle>,
    quantities: &OrderQuantities,
) -> bool {
    quantities.total() >= MIN_ORDER_QUANTITY
        && bundles.keys().all(|key| quantities.bundle_total(key) >= 1)
}

/// Full validation of an order form
pub fn validate(
    bundles: &BTreeMap<BundleKey, UniformBundle>,
    quantities: &OrderQuantities,
    deadline_set: bool,
) -> ValidationResult {
    let mut field_errors = BTreeMap::new();

    if let Some(msg) = deadline_error(deadline_set) {
        field_errors.insert(FieldKey::Deadline, msg);
    }
    if let Some(msg) = quantity_error(quantities.total()) {
        field_errors.insert(FieldKey::Quantity, msg);
    }
    for bundle in bundles.values() {
        if let Some(msg) = bundle_error(bundle, quantities) {
            field_errors.insert(FieldKey::Uniform(bundle.key), msg);
        }
    }

    ValidationResult {
        is_valid: deadline_set && quantities_satisfied(bundles, quantities),
        field_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_school_order::bundle::{group_items, tests::item, BundleKind};
    use crate::domain::a003_school_order::quantity::QuantityKey;
    use crate::enums::{GarmentType, Gender, UniformCategory};

    fn boys() -> BundleKey {
        BundleKey::anchored(Gender::Male, UniformCategory::Regular)
    }

    fn two_bundles() -> BTreeMap<BundleKey, UniformBundle> {
        group_items(&[
            item(Gender::Male, UniformCategory::Regular, GarmentType::Shirt),
            item(Gender::Male, UniformCategory::Regular, GarmentType::Pants),
            item(Gender::Female, UniformCategory::Regular, GarmentType::Skirt),
        ])
    }

    #[test]
    fn test_below_minimum_reports_missing_quantity_only() {
        let bundles = group_items(&[
            item(Gender::Male, UniformCategory::Regular, GarmentType::Shirt),
            item(Gender::Male, UniformCategory::Regular, GarmentType::Pants),
        ]);
        let mut q = OrderQuantities::new();
        q.set(QuantityKey::new(boys(), "M"), 30);

        let result = validate(&bundles, &q, true);

        assert!(!result.is_valid);
        assert!(result.error(&FieldKey::Quantity).unwrap().contains("need 20 more"));
        assert_eq!(result.bundle_errors().count(), 0);
        assert_eq!(result.field_errors.len(), 1);
    }

    #[test]
    fn test_empty_bundle_fails_despite_large_total() {
        let bundles = two_bundles();
        let mut q = OrderQuantities::new();
        q.set(QuantityKey::new(boys(), "M"), 60);

        let result = validate(&bundles, &q, true);

        assert!(!result.is_valid);
        let errors: Vec<_> = result.bundle_errors().collect();
        assert_eq!(errors.len(), 1);
        let skirt_key = BundleKey::new(Gender::Female, UniformCategory::Regular, BundleKind::SkirtOnly);
        assert_eq!(*errors[0].0, skirt_key);
        assert_eq!(errors[0].1, "Please enter a quantity for Girls Regular Skirt");
        assert!(result.error(&FieldKey::Quantity).is_none());
    }

    #[test]
    fn test_valid_when_all_rules_hold() {
        let bundles = two_bundles();
        let mut q = OrderQuantities::new();
        q.set(QuantityKey::new(boys(), "M"), 49);
        q.set(
            QuantityKey::new(
                BundleKey::new(Gender::Female, UniformCategory::Regular, BundleKind::SkirtOnly),
                "S",
            ),
            1,
        );

        let result = validate(&bundles, &q, true);
        assert!(result.is_valid);
        assert!(result.field_errors.is_empty());
    }

    #[test]
    fn test_missing_deadline_flips_validity() {
        let bundles = group_items(&[item(Gender::Male, UniformCategory::Regular, GarmentType::Shirt)]);
        let mut q = OrderQuantities::new();
        q.set(QuantityKey::new(boys(), "L"), 50);

        let result = validate(&bundles, &q, false);
        assert!(!result.is_valid);
        assert_eq!(result.field_errors.len(), 1);
        assert!(result.error(&FieldKey::Deadline).is_some());
    }

    #[test]
    fn test_all_errors_collected_for_empty_form() {
        let result = validate(&two_bundles(), &OrderQuantities::new(), false);
        assert!(!result.is_valid);
        assert_eq!(result.field_errors.len(), 4);
        assert_eq!(
            result.error(&FieldKey::Quantity),
            Some("Please select at least 1 item")
        );
    }

    #[test]
    fn test_bundle_error_names_first_populated_slot() {
        let bundles = group_items(&[item(Gender::Male, UniformCategory::PhysicalEducation, GarmentType::Pants)]);
        let bundle = bundles.values().next().unwrap();
        assert_eq!(
            bundle_error(bundle, &OrderQuantities::new()).as_deref(),
            Some("Please enter a quantity for Boys Physical Education Pants")
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FieldKey::Deadline.name(), "deadline");
        assert_eq!(FieldKey::Quantity.name(), "quantity");
        assert_eq!(FieldKey::Uniform(boys()).name(), "uniform_male_regular_shirt");
    }
}
