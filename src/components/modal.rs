//! Modal Component
//!
//! Overlay dialog bound to one `ModalId`. Clicking the backdrop (the overlay
//! itself, not its content) closes it.

use leptos::html;
use leptos::prelude::*;

use crate::context::{use_app, ModalId};
use crate::dom::{self, DocumentEvents};

#[component]
pub fn Modal(
    id: ModalId,
    #[prop(into)] dom_id: String,
    /// Heading text; reactive so edit mode can relabel it
    #[prop(into)]
    title: Signal<String>,
    /// Close on Escape as well
    #[prop(optional)]
    escape: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let modals = use_app().modals;
    let overlay = NodeRef::<html::Div>::new();

    if escape {
        DocumentEvents::on_keydown(move |ev| {
            if ev.key() == "Escape" {
                modals.close(id);
            }
        });
    }

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        let on_overlay = match (dom::event_element(&ev), overlay.get()) {
            (Some(target), Some(node)) => target.is_same_node(Some(node.as_ref())),
            _ => false,
        };
        if on_overlay {
            modals.close(id);
        }
    };

    view! {
        <div
            id=dom_id
            class="modal"
            node_ref=overlay
            style=move || if modals.is_open(id) { "display: block;" } else { "display: none;" }
            on:click=on_backdrop
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{move || title.get()}</h3>
                    <button type="button" class="close-btn" on:click=move |_| modals.close(id)>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
