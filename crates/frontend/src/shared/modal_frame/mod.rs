use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dialog overlay with a centered surface and a close button.
///
/// The title row and body are supplied by the caller through `header` and
/// `children`.
#[component]
pub fn ModalFrame(
    /// Called when the dialog should close (overlay click or close button).
    on_close: Callback<()>,
    /// Extra class for the dialog surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: String,
    /// Header content rendered left of the close button.
    header: AnyView,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when both press and release happen on the overlay itself,
    // so a text selection that ends outside the dialog does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let close_deferred = move || {
        // Next tick: the overlay must not be removed during its own click dispatch.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    let modal_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class role="dialog" aria-modal="true">
                <div class="modal__header">
                    <div class="modal__title">{header}</div>
                    <button
                        class="modal__close"
                        title="Close"
                        on:click=move |_| close_deferred()
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
