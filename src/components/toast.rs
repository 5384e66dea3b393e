use leptos::{component, view, IntoView, ReadSignal, SignalGet, SignalSet, WriteSignal};

/// A user-visible notice; replaces the previous one when shown
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: true,
        }
    }
}

#[component]
#[must_use]
pub fn ToastNotification(toast: ReadSignal<Toast>, set_toast: WriteSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                view! {
                    <div class="toast toast-visible" role="alert">
                        <span class="toast-message">{t.message}</span>
                        <button
                            class="toast-close"
                            on:click=move |_| set_toast.set(Toast::default())
                        >
                            "×"
                        </button>
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}
