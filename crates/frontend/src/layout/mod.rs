pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use crate::shared::notifications::NotificationHost;
use global_context::use_global_context;
use leptos::prelude::*;

/// Main application shell
///
/// ```text
/// +--------------------------------+
/// |            header              |
/// +--------------------------------+
/// |  Sidebar  |   Tabs (center)    |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <button class="app-header__toggle" on:click=move |_| ctx.toggle_left()>"☰"</button>
                <span class="app-header__title">"School Uniform Orders"</span>
            </header>
            <NotificationHost />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <left::Sidebar />
                </div>
                <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    <center::Tabs />
                </div>
            </div>
        </div>
    }
}
