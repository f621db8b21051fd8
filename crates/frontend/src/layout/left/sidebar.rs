use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{DESIGN_DELIVERY_LIST, SCHOOL_ORDER_NEW};
use leptos::prelude::*;

fn menu_items() -> Vec<&'static str> {
    vec![DESIGN_DELIVERY_LIST, SCHOOL_ORDER_NEW]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__content">
            {menu_items()
                .into_iter()
                .map(|key| {
                    let label = tab_label_for_key(key);
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.get().as_deref() == Some(key)
                            }
                            on:click=move |_| ctx.open_tab(key, label)
                        >
                            <span>{label}</span>
                        </div>
                    }
                })
                .collect_view()}

            <div class="app-sidebar__design">
                {move || match ctx.selected_design.get() {
                    Some(design) => view! {
                        <span class="app-sidebar__design-name">{design.design_name}</span>
                        <button class="btn btn-link" on:click=move |_| ctx.clear_design()>
                            "Clear"
                        </button>
                    }
                    .into_any(),
                    None => view! { <span class="muted">"No design selected"</span> }.into_any(),
                }}
            </div>
        </div>
    }
}
