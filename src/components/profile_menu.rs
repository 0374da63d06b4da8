//! Profile Menu Component
//!
//! Avatar button with a dropdown, plus the profile dialog. The dialog is a
//! plain form post; the server redirects back with a flash message.

use leptos::prelude::*;

use crate::components::{MenuFamily, Modal};
use crate::context::{use_app, ModalId};

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let app = use_app();
    let user = app.user.get_value();
    let menu = MenuFamily::<()>::new(".profile-menu");

    let open_profile = move |_| {
        menu.close();
        app.modals.open(ModalId::Profile);
    };

    view! {
        <div class="profile-menu">
            <button
                class="profile-menu-btn"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    menu.toggle(());
                }
            >
                <div class="profile-avatar">
                    <div class="avatar-circle">{user.initials.clone()}</div>
                </div>
            </button>
            <div class=move || menu.class("profile-dropdown", ())>
                <div class="profile-info">
                    <div class="profile-name">{user.display_name.clone()}</div>
                    <div class="profile-email">{user.email.clone()}</div>
                </div>
                <button class="dropdown-item" on:click=open_profile>"👤 Profile"</button>
                <a class="dropdown-item" href="/logout">"🚪 Logout"</a>
            </div>
        </div>
        <ProfileModal />
    }
}

#[component]
fn ProfileModal() -> impl IntoView {
    let app = use_app();
    let user = app.user.get_value();

    view! {
        <Modal id=ModalId::Profile dom_id="profileModal" title=Signal::stored("Profile Settings".to_string())>
            <form class="modal-form" method="post" action="/update_profile">
                <div class="form-group">
                    <label for="display_name">"Display Name"</label>
                    <input
                        type="text"
                        id="display_name"
                        name="display_name"
                        value=user.display_name.clone()
                        required
                    />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <input type="email" value=user.email.clone() disabled />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| app.modals.close(ModalId::Profile)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-save">"Save Changes"</button>
                </div>
            </form>
        </Modal>
    }
}
