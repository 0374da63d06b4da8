//! Add Member Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Modal;
use crate::context::{use_app, ModalId};
use crate::toast::ToastKind;

/// Hold time for the "new user profile" notice, which carries instructions
const NEW_PROFILE_TOAST_MS: u32 = 8_000;

/// Toast hold and reload delay after a member was added. The reload never
/// fires before the hold ends.
fn added_timing(message: &str, fade_out_ms: u32, reload_delay_ms: u32) -> (u32, u32) {
    if message.contains("New user profile created") {
        (NEW_PROFILE_TOAST_MS, NEW_PROFILE_TOAST_MS.max(reload_delay_ms))
    } else {
        (fade_out_ms, reload_delay_ms)
    }
}

#[component]
pub fn AddMemberModal(project_id: u32) -> impl IntoView {
    let app = use_app();
    let email = RwSignal::new(String::new());

    Effect::new(move |_| {
        if !app.modals.is_open(ModalId::AddMember) {
            email.set(String::new());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        spawn_local(async move {
            match api::add_project_member(project_id, &address).await {
                Ok(reply) => {
                    let (hold_ms, reload_ms) = app
                        .config
                        .with_value(|c| added_timing(&reply.message, c.toast_fade_out_ms, c.reload_delay_ms));
                    app.toaster.notify_for(&reply.message, ToastKind::Success, hold_ms);
                    app.modals.close(ModalId::AddMember);
                    app.reload_after(reload_ms);
                }
                Err(e) => app.report(&e, "Error adding member. Please try again."),
            }
        });
    };

    view! {
        <Modal
            id=ModalId::AddMember
            dom_id="addMemberModal"
            title=Signal::stored("Add Team Member".to_string())
            escape=true
        >
            <form id="addMemberForm" class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="member-email">"Email Address"</label>
                    <input
                        type="email"
                        id="member-email"
                        name="email"
                        placeholder="colleague@gmail.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| app.modals.close(ModalId::AddMember)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-save">"Add Member"</button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_notice_outlives_reload_delay() {
        let (hold, reload) = added_timing("Member added. New user profile created for bo@gmail.com", 1850, 1000);
        assert_eq!(hold, 8_000);
        assert!(reload >= hold);
    }

    #[test]
    fn test_existing_user_uses_default_timing() {
        assert_eq!(added_timing("Member added successfully", 1850, 1000), (1850, 1000));
    }
}
