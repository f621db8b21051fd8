use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    view! {
        <thaw::ConfigProvider>
            <Shell />
        </thaw::ConfigProvider>
    }
}
