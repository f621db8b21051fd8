//! Transient notifications shown above the page content

use leptos::prelude::*;

/// How long a notification stays on screen
const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    pub items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService context not found")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
