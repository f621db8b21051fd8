//! ViewModel for the order creation form
//!
//! Wraps the `OrderForm` session state in signals. Grid edits go through
//! `OrderForm::set_quantity`, so only the touched bundle's error changes.

use crate::domain::a002_size_catalog::api as size_api;
use crate::domain::a003_school_order::api;
use crate::shared::date_utils::parse_date_input;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_design_delivery::DesignDelivery;
use contracts::domain::a002_size_catalog::SizeCatalog;
use contracts::domain::a003_school_order::{BundleKey, FieldKey, OrderForm, MIN_ORDER_QUANTITY};
use leptos::prelude::*;

/// Grid cell input as a quantity; empty or unparsable input counts as 0
pub fn parse_quantity_input(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse::<i64>().unwrap_or(0)
}

#[derive(Clone, Copy)]
pub struct OrderCreateVm {
    pub form: RwSignal<OrderForm>,
    pub catalog: RwSignal<SizeCatalog>,
    pub catalog_loading: RwSignal<bool>,
    pub deadline_input: RwSignal<String>,
    pub note: RwSignal<String>,
    pub saving: RwSignal<bool>,
}

impl OrderCreateVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm::new()),
            catalog: RwSignal::new(SizeCatalog::default()),
            catalog_loading: RwSignal::new(false),
            deadline_input: RwSignal::new(String::new()),
            note: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
        }
    }

    // === Derived signals ===

    pub fn total(&self) -> Signal<u64> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.total_quantity()))
    }

    /// Items still missing to reach the minimum order
    pub fn remaining(&self) -> Signal<u64> {
        let total = self.total();
        Signal::derive(move || MIN_ORDER_QUANTITY.saturating_sub(total.get()))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let form = self.form;
        let saving = self.saving;
        Signal::derive(move || saving.get() || !form.with(|f| f.can_submit()))
    }

    pub fn error_for(&self, field: FieldKey) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.field_error(&field).map(str::to_string)))
    }

    // === Commands ===

    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        let loading = self.catalog_loading;
        loading.set(true);
        leptos::task::spawn_local(async move {
            match size_api::fetch_size_catalog().await {
                Ok(data) => catalog.set(data),
                Err(e) => {
                    // the grid falls back to raw labels and shows no columns
                    log::warn!("Size catalog unavailable: {}", e);
                    catalog.set(SizeCatalog::default());
                }
            }
            loading.set(false);
        });
    }

    /// Follow the globally selected design; a different design starts a
    /// fresh grid
    pub fn sync_design(&self, design: Option<DesignDelivery>) {
        let current = self
            .form
            .with_untracked(|f| f.delivery().map(|d| d.delivery_id));
        let incoming = design.as_ref().map(|d| d.delivery_id);
        if current == incoming {
            return;
        }
        self.form.update(|f| match design {
            Some(delivery) => f.select_design(delivery),
            None => f.clear_design(),
        });
    }

    pub fn set_quantity(&self, bundle: BundleKey, size_label: &str, raw: &str) {
        let quantity = parse_quantity_input(raw);
        self.form.update(|f| {
            f.set_quantity(bundle, size_label, quantity);
        });
    }

    pub fn set_deadline(&self, raw: String) {
        let deadline = parse_date_input(&raw);
        self.deadline_input.set(raw);
        self.form.update(|f| f.set_deadline(deadline));
    }

    /// Full validation without submitting, shows every missing field
    pub fn check(&self) {
        self.form.update(|f| {
            f.validate();
        });
    }

    /// Validate, submit and report; the form is only reset on success and
    /// only while it still shows the submitted design
    pub fn submit(&self, notifications: NotificationService, on_created: Callback<String>) {
        let note = self.note.get_untracked();
        let catalog = self.catalog.get_untracked();
        let Some(outcome) = self.form.try_update(|f| {
            f.set_note(note);
            f.build_request(&catalog)
        }) else {
            return;
        };

        let request = match outcome {
            Ok(request) => request,
            Err(result) => {
                log::info!(
                    "Order rejected by validation: {} errors, {} uniforms without quantities",
                    result.field_errors.len(),
                    result.bundle_errors().count()
                );
                notifications.error("Please correct the highlighted fields");
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        leptos::task::spawn_local(async move {
            match api::create_order(&request).await {
                Ok(response) => {
                    log::info!(
                        "Order {} created: {} lines, {} items",
                        response.order_id,
                        request.order_details.len(),
                        request.total_quantity()
                    );
                    notifications.success("Order placed");
                    let reset = this
                        .form
                        .try_update(|f| f.reset_after_submit(request.delivery_id))
                        .unwrap_or(false);
                    if reset {
                        this.deadline_input.set(String::new());
                        this.note.set(String::new());
                    }
                    on_created.run(response.order_id);
                }
                Err(e) => {
                    log::error!("Order submission failed: {}", e);
                    notifications.error(format!("Order could not be placed: {}", e));
                }
            }
            this.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input("12"), 12);
        assert_eq!(parse_quantity_input(" 7 "), 7);
        assert_eq!(parse_quantity_input(""), 0);
        assert_eq!(parse_quantity_input("abc"), 0);
        assert_eq!(parse_quantity_input("-4"), -4);
    }
}
