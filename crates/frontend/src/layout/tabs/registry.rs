//! Tab content registry: maps a tab key to its view

use super::tab_labels::{DESIGN_DELIVERY_LIST, SCHOOL_ORDER_DETAIL_PREFIX, SCHOOL_ORDER_NEW};
use crate::domain::a001_design_delivery::ui::list::DesignDeliveryList;
use crate::domain::a003_school_order::ui::create::OrderCreate;
use crate::domain::a003_school_order::ui::details::OrderDetails;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        DESIGN_DELIVERY_LIST => view! { <DesignDeliveryList /> }.into_any(),

        SCHOOL_ORDER_NEW => view! { <OrderCreate /> }.into_any(),

        k if k.starts_with(SCHOOL_ORDER_DETAIL_PREFIX) => {
            let order_id = k.trim_start_matches(SCHOOL_ORDER_DETAIL_PREFIX).to_string();
            view! {
                <OrderDetails
                    order_id=order_id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }

        other => {
            log::warn!("No view registered for tab '{}'", other);
            view! { <div class="tabs__placeholder">"Nothing to show for " {other.to_string()}</div> }
                .into_any()
        }
    }
}
