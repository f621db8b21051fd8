//! Order creation form state
//!
//! `OrderForm` is owned by one form session. It keeps the bundles of the
//! selected design, the entered quantities and the current field errors.
//! Quantity edits update errors incrementally; `validate` recomputes all of
//! them and is the authority at submission time.

use super::bundle::{group_items, BundleKey, UniformBundle};
use super::dto::CreateOrderRequest;
use super::order_details::format_order_details;
use super::quantity::{OrderQuantities, QuantityKey};
use super::validation::{self, FieldKey, ValidationResult};
use crate::domain::a001_design_delivery::{DeliveryId, DesignDelivery};
use crate::domain::a002_size_catalog::SizeCatalog;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    delivery: Option<DesignDelivery>,
    bundles: BTreeMap<BundleKey, UniformBundle>,
    quantities: OrderQuantities,
    deadline: Option<NaiveDate>,
    note: String,
    errors: BTreeMap<FieldKey, String>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to another design: regroup its items and drop every quantity
    /// and error of the previous one
    pub fn select_design(&mut self, delivery: DesignDelivery) {
        self.bundles = group_items(&delivery.items);
        self.quantities.clear();
        self.errors.clear();
        self.delivery = Some(delivery);
    }

    /// Start over on the same design, e.g. after a successful submission
    pub fn reset(&mut self) {
        let delivery = self.delivery.take();
        *self = Self::default();
        if let Some(delivery) = delivery {
            self.select_design(delivery);
        }
    }

    /// Reset after an order for `delivery_id` went through. A form that has
    /// moved on to another design meanwhile is left alone.
    pub fn reset_after_submit(&mut self, delivery_id: DeliveryId) -> bool {
        if self.delivery.as_ref().map(|d| d.delivery_id) != Some(delivery_id) {
            return false;
        }
        self.reset();
        true
    }

    pub fn clear_design(&mut self) {
        self.delivery = None;
        self.bundles.clear();
        self.quantities.clear();
        self.errors.clear();
    }

    pub fn delivery(&self) -> Option<&DesignDelivery> {
        self.delivery.as_ref()
    }

    pub fn bundles(&self) -> &BTreeMap<BundleKey, UniformBundle> {
        &self.bundles
    }

    /// Set one grid cell and refresh the errors it can affect: the cell's
    /// bundle and the order total. Other bundles keep their error state.
    ///
    /// Returns `false` when the bundle does not belong to the selected design.
    pub fn set_quantity(&mut self, bundle: BundleKey, size_label: &str, quantity: i64) -> bool {
        let Some(group) = self.bundles.get(&bundle) else {
            return false;
        };

        self.quantities
            .set(QuantityKey::new(bundle, size_label), quantity);

        let field = FieldKey::Uniform(bundle);
        match validation::bundle_error(group, &self.quantities) {
            Some(msg) => self.errors.insert(field, msg),
            None => self.errors.remove(&field),
        };
        match validation::quantity_error(self.quantities.total()) {
            Some(msg) => self.errors.insert(FieldKey::Quantity, msg),
            None => self.errors.remove(&FieldKey::Quantity),
        };
        true
    }

    pub fn quantity(&self, bundle: BundleKey, size_label: &str) -> u32 {
        self.quantities
            .get(&QuantityKey::new(bundle, size_label))
    }

    pub fn bundle_total(&self, bundle: &BundleKey) -> u64 {
        self.quantities.bundle_total(bundle)
    }

    pub fn total_quantity(&self) -> u64 {
        self.quantities.total()
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
        if deadline.is_some() {
            self.errors.remove(&FieldKey::Deadline);
        }
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn field_error(&self, field: &FieldKey) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Full validation; replaces the current error map
    pub fn validate(&mut self) -> ValidationResult {
        let result = validation::validate(&self.bundles, &self.quantities, self.deadline.is_some());
        self.errors = result.field_errors.clone();
        result
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        self.delivery.is_some()
            && self.deadline.is_some()
            && validation::quantities_satisfied(&self.bundles, &self.quantities)
    }

    /// Validate and build the request for the order service.
    ///
    /// On failure the validation result is returned and the form keeps its
    /// state so the user can correct it.
    pub fn build_request(&mut self, catalog: &SizeCatalog) -> Result<CreateOrderRequest, ValidationResult> {
        let result = self.validate();
        if !result.is_valid {
            return Err(result);
        }
        let (Some(delivery), Some(deadline)) = (&self.delivery, self.deadline) else {
            return Err(result);
        };

        let note = self.note.trim();
        Ok(CreateOrderRequest {
            delivery_id: delivery.delivery_id,
            deadline,
            note: if note.is_empty() {
                None
            } else {
                Some(note.to_string())
            },
            order_details: format_order_details(&self.bundles, &self.quantities, catalog),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_school_order::bundle::{tests::item, BundleKind};
    use crate::enums::{GarmentType, Gender, UniformCategory};
    use uuid::Uuid;

    fn delivery() -> DesignDelivery {
        DesignDelivery {
            delivery_id: DeliveryId::new(Uuid::new_v4()),
            design_id: "D-1".to_string(),
            design_name: "Autumn".to_string(),
            items: vec![
                item(Gender::Male, UniformCategory::Regular, GarmentType::Shirt),
                item(Gender::Male, UniformCategory::Regular, GarmentType::Pants),
                item(Gender::Female, UniformCategory::Regular, GarmentType::Shirt),
                item(Gender::Female, UniformCategory::Regular, GarmentType::Skirt),
            ],
        }
    }

    fn boys() -> BundleKey {
        BundleKey::anchored(Gender::Male, UniformCategory::Regular)
    }

    fn girls() -> BundleKey {
        BundleKey::anchored(Gender::Female, UniformCategory::Regular)
    }

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
    }

    #[test]
    fn test_select_design_groups_items() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        assert_eq!(form.bundles().len(), 2);
        assert!(form.errors.is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_emptying_bundle_reintroduces_only_its_error() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        form.set_deadline(Some(deadline()));
        form.set_quantity(boys(), "M", 30);
        form.set_quantity(girls(), "S", 25);
        assert!(form.validate().is_valid);

        form.set_quantity(girls(), "S", 0);

        assert!(form.field_error(&FieldKey::Uniform(girls())).is_some());
        assert!(form.field_error(&FieldKey::Uniform(boys())).is_none());
        assert!(form
            .field_error(&FieldKey::Quantity)
            .unwrap()
            .contains("need 20 more"));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_quantity_edit_leaves_other_bundle_errors_untouched() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        let result = form.validate();
        assert_eq!(result.bundle_errors().count(), 2);

        form.set_quantity(boys(), "L", 3);

        assert!(form.field_error(&FieldKey::Uniform(boys())).is_none());
        assert!(form.field_error(&FieldKey::Uniform(girls())).is_some());
        assert!(form.field_error(&FieldKey::Deadline).is_some());
    }

    #[test]
    fn test_reselecting_design_discards_stale_quantities() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        form.set_quantity(boys(), "M", 10);
        assert_eq!(form.total_quantity(), 10);

        let mut other = delivery();
        other.items.retain(|i| i.gender == Gender::Female);
        form.select_design(other);

        assert_eq!(form.total_quantity(), 0);
        assert!(!form.set_quantity(boys(), "M", 10));
        assert_eq!(form.total_quantity(), 0);
    }

    #[test]
    fn test_deadline_error_clears_once_set() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        form.validate();
        assert!(form.field_error(&FieldKey::Deadline).is_some());
        form.set_deadline(Some(deadline()));
        assert!(form.field_error(&FieldKey::Deadline).is_none());
    }

    #[test]
    fn test_build_request_rejects_invalid_form() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        form.set_quantity(boys(), "M", 60);

        let err = form.build_request(&SizeCatalog::default()).unwrap_err();
        assert!(!err.is_valid);
        assert!(err.error(&FieldKey::Deadline).is_some());
        assert!(err.error(&FieldKey::Uniform(girls())).is_some());
        assert_eq!(form.total_quantity(), 60);
    }

    #[test]
    fn test_build_request_expands_bundles() {
        let mut form = OrderForm::new();
        let delivery = delivery();
        let delivery_id = delivery.delivery_id;
        form.select_design(delivery);
        form.set_deadline(Some(deadline()));
        form.set_note("  deliver to gate B ");
        form.set_quantity(boys(), "M", 40);
        form.set_quantity(girls(), "S", 10);
        assert!(form.can_submit());

        let request = form.build_request(&SizeCatalog::default()).unwrap();

        assert_eq!(request.delivery_id, delivery_id);
        assert_eq!(request.deadline, deadline());
        assert_eq!(request.note.as_deref(), Some("deliver to gate B"));
        assert_eq!(request.order_details.len(), 4);
        assert_eq!(request.total_quantity(), 100);
    }

    #[test]
    fn test_reset_keeps_design_only() {
        let mut form = OrderForm::new();
        form.select_design(delivery());
        form.set_deadline(Some(deadline()));
        form.set_note("note");
        form.set_quantity(boys(), "M", 5);

        form.reset();

        assert!(form.delivery().is_some());
        assert_eq!(form.bundles().len(), 2);
        assert_eq!(form.total_quantity(), 0);
        assert_eq!(form.deadline, None);
        assert_eq!(form.note, "");
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_reset_after_submit_spares_a_newly_selected_design() {
        let mut form = OrderForm::new();
        let submitted = delivery();
        let submitted_id = submitted.delivery_id;
        form.select_design(submitted);

        let mut next = delivery();
        next.items.retain(|i| i.gender == Gender::Male);
        form.select_design(next);
        form.set_quantity(boys(), "M", 8);

        assert!(!form.reset_after_submit(submitted_id));
        assert_eq!(form.total_quantity(), 8);

        let current_id = form.delivery().unwrap().delivery_id;
        assert!(form.reset_after_submit(current_id));
        assert_eq!(form.total_quantity(), 0);
        assert!(form.delivery().is_some());
    }

    #[test]
    fn test_standalone_bundle_counts_as_its_own_bundle() {
        let mut form = OrderForm::new();
        let mut d = delivery();
        d.items.push(item(Gender::Male, UniformCategory::PhysicalEducation, GarmentType::Pants));
        form.select_design(d);
        form.set_deadline(Some(deadline()));
        form.set_quantity(boys(), "M", 30);
        form.set_quantity(girls(), "M", 30);
        assert!(!form.can_submit());

        let pe = BundleKey::new(Gender::Male, UniformCategory::PhysicalEducation, BundleKind::PantsOnly);
        form.set_quantity(pe, "M", 1);
        assert!(form.can_submit());
    }
}
