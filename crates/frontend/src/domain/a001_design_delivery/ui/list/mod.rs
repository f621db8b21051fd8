//! Design deliveries list
//!
//! Picking a row loads the full delivery, makes it the selected design and
//! opens the order form.

use crate::domain::a001_design_delivery::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::SCHOOL_ORDER_NEW;
use crate::shared::date_utils::format_datetime;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_design_delivery::{DeliveryId, DesignDeliverySummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn DesignDeliveryList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let (items, set_items) = signal(Vec::<DesignDeliverySummary>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let opening = RwSignal::new(None::<DeliveryId>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_deliveries().await {
                Ok(data) => set_items.set(data),
                Err(e) => {
                    log::error!("Failed to load design deliveries: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let choose = move |id: DeliveryId| {
        opening.set(Some(id));
        spawn_local(async move {
            match api::fetch_delivery(id).await {
                Ok(delivery) => {
                    ctx.select_design(delivery);
                    ctx.open_tab(SCHOOL_ORDER_NEW, tab_label_for_key(SCHOOL_ORDER_NEW));
                }
                Err(e) => {
                    log::error!("Failed to load delivery {}: {}", id.as_string(), e);
                    notifications.error(format!("Could not open design: {}", e));
                }
            }
            opening.set(None);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Design deliveries"</h1>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    "Refresh"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! { <div class="muted">"No finished designs yet"</div> }.into_any();
                    }
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Design"</TableHeaderCell>
                                    <TableHeaderCell>"Items"</TableHeaderCell>
                                    <TableHeaderCell>"Delivered"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.delivery_id;
                                        let is_selected = move || {
                                            ctx.selected_design
                                                .with(|d| d.as_ref().map(|d| d.delivery_id) == Some(id))
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell>{row.design_name}</TableCell>
                                                <TableCell>{row.item_count}</TableCell>
                                                <TableCell>
                                                    {row.delivered_at.as_deref().map(format_datetime).unwrap_or_default()}
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=Signal::derive(move || opening.get().is_some())
                                                        on_click=move |_| choose(id)
                                                    >
                                                        {move || if is_selected() { "Continue order" } else { "Order" }}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
