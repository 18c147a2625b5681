//! Transient success / error banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Owner of the banner shown by a page. Each message clears itself after
/// four seconds unless a newer one replaced it.
#[derive(Clone, Copy)]
pub struct NoticeHandle {
    current: RwSignal<Option<NoticeMessage>>,
    next_id: StoredValue<u64>,
}

impl NoticeHandle {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn clear(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<NoticeMessage> {
        self.current.get()
    }

    fn show(&self, kind: NoticeKind, text: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(NoticeMessage { id, kind, text }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            current.try_update(|slot| {
                if slot.as_ref().map(|m| m.id) == Some(id) {
                    *slot = None;
                }
            });
        });
    }
}

impl Default for NoticeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Notice(handle: NoticeHandle) -> impl IntoView {
    move || {
        handle.current().map(|message| {
            let class = match message.kind {
                NoticeKind::Success => "alert alert--success",
                NoticeKind::Error => "alert alert--error",
            };
            view! {
                <div class=class role="status" on:click=move |_| handle.clear()>
                    {message.text}
                </div>
            }
        })
    }
}
