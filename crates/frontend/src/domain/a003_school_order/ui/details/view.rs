use crate::domain::a003_school_order::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::{order_detail_key, order_detail_label, order_detail_title};
use crate::shared::date_utils::{format_datetime, format_naive_date};
use contracts::domain::a003_school_order::SchoolOrderDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Read-only view of a placed order
#[component]
pub fn OrderDetails(order_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_global_context();
    let stored_id = StoredValue::new(order_id);

    let (order, set_order) = signal(None::<SchoolOrderDto>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        let id = stored_id.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_order(&id).await {
                Ok(data) => {
                    tabs_store.update_tab_title(
                        &order_detail_key(&id),
                        &order_detail_title(&id, data.design_name.as_deref()),
                    );
                    set_order.set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load order {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <h1 class="page__title">{move || order_detail_label(&stored_id.get_value())}</h1>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "✕ Close"
                </Button>
            </div>

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
                    if let Some(err) = error.get() {
                        return view! { <div class="error"><strong>"Error: "</strong>{err}</div> }.into_any();
                    }
                    let Some(d) = order.get() else {
                        return view! { <div class="muted">"Order not found"</div> }.into_any();
                    };
                    let total = d.total_quantity();
                    // the design this order was placed from, when it is still selected
                    let design = tabs_store
                        .selected_design
                        .get()
                        .filter(|design| design.delivery_id == d.delivery_id);
                    view! {
                        <Card>
                            <div class="details-grid">
                                <span class="details-grid__label">"Design"</span>
                                <span>{d.design_name.clone().unwrap_or_else(|| d.delivery_id.as_string())}</span>
                                <span class="details-grid__label">"Status"</span>
                                <span>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                        {d.status.clone()}
                                    </Badge>
                                </span>
                                <span class="details-grid__label">"Deadline"</span>
                                <span>{format_naive_date(d.deadline)}</span>
                                <span class="details-grid__label">"Created"</span>
                                <span>{format_datetime(&d.created_at)}</span>
                                <span class="details-grid__label">"Note"</span>
                                <span>{d.note.clone().unwrap_or_default()}</span>
                            </div>
                        </Card>

                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Item"</TableHeaderCell>
                                    <TableHeaderCell>"Size"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {d.order_details
                                    .into_iter()
                                    .map(|line| {
                                        let caption = line
                                            .item_caption
                                            .or_else(|| {
                                                design
                                                    .as_ref()
                                                    .and_then(|design| design.item_caption(line.delivery_item_id))
                                            })
                                            .unwrap_or_else(|| line.delivery_item_id.as_string());
                                        view! {
                                            <TableRow>
                                                <TableCell>{caption}</TableCell>
                                                <TableCell>{line.size}</TableCell>
                                                <TableCell>{line.quantity}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>

                        <div class="order-details__total">
                            <strong>{format!("Total items: {}", total)}</strong>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
