use super::quantity_grid::QuantityGrid;
use super::view_model::OrderCreateVm;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::DESIGN_DELIVERY_LIST;
use crate::layout::tabs::{order_detail_key, order_detail_label, tab_label_for_key};
use crate::shared::notifications::use_notifications;
use contracts::domain::a003_school_order::{FieldKey, MIN_ORDER_QUANTITY};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderCreate() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let vm = OrderCreateVm::new();
    vm.load_catalog();

    Effect::new(move |_| vm.sync_design(ctx.selected_design.get()));

    let deadline_error = vm.error_for(FieldKey::Deadline);
    let quantity_error = vm.error_for(FieldKey::Quantity);
    let total = vm.total();
    let remaining = vm.remaining();

    let on_created = Callback::new(move |order_id: String| {
        ctx.open_tab(&order_detail_key(&order_id), &order_detail_label(&order_id));
    });

    view! {
        <div class="page page--detail order-create">
            {move || match ctx.selected_design.get() {
                None => view! {
                    <div class="page__content">
                        <p class="muted">"Select a finished design to start an order."</p>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.open_tab(DESIGN_DELIVERY_LIST, tab_label_for_key(DESIGN_DELIVERY_LIST))
                        >
                            "Choose design"
                        </Button>
                    </div>
                }
                .into_any(),
                Some(design) => view! {
                    <div class="page__header">
                        <h1 class="page__title">{format!("New order: {}", design.design_name)}</h1>
                    </div>
                }
                .into_any(),
            }}

            <Show when=move || ctx.selected_design.with(|d| d.is_some())>
                <div class="page__content">
                    <div class="form-group" id=FieldKey::Deadline.name()>
                        <label for="order-deadline">"Delivery deadline"</label>
                        <input
                            type="date"
                            id="order-deadline"
                            prop:value=move || vm.deadline_input.get()
                            on:input=move |ev| vm.set_deadline(event_target_value(&ev))
                        />
                        {move || deadline_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                    </div>

                    <Show
                        when=move || !vm.catalog_loading.get()
                        fallback=|| view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-xl);">
                                <Spinner />
                                <span>"Loading sizes..."</span>
                            </Flex>
                        }
                    >
                        <QuantityGrid vm=vm />
                    </Show>

                    <div class="order-create__summary" id=FieldKey::Quantity.name()>
                        <strong>{move || format!("Total: {} / {}", total.get(), MIN_ORDER_QUANTITY)}</strong>
                        {move || {
                            let left = remaining.get();
                            (left > 0).then(|| view! { <span class="muted">{format!(" ({} more to reach the minimum)", left)}</span> })
                        }}
                        {move || quantity_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                    </div>

                    <div class="form-group">
                        <label>"Note"</label>
                        <Textarea value=vm.note placeholder="Optional" attr:rows=3 />
                    </div>

                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.check()>
                            "Check order"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.is_submit_disabled()
                            on_click=move |_| vm.submit(notifications, on_created)
                        >
                            {move || if vm.saving.get() { "Placing order..." } else { "Place order" }}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
