use crate::layout::global_context::{use_global_context, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let tabs_store = use_global_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div
            class="tabs__header"
            class:tabs__header--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key_for_click)
        >
            <span>{tab.title}</span>
            <button class="tabs__close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab bar plus the content of every open tab
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_global_context();

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab| view! { <TabHeader tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
