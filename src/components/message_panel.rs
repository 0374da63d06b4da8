//! Message Panel Component
//!
//! Project chat. A sent message is prepended locally under the current
//! user's name; Ctrl/Cmd+Enter in the input submits.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app;
use crate::models::Message;

/// How long a freshly sent message keeps its entry highlight
const NEW_MESSAGE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
struct Line {
    key: usize,
    author: String,
    initials: String,
    time: String,
    content: String,
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn MessagePanel(
    project_id: u32,
    messages: Vec<Message>,
    /// Invoked after a successful send (switches to the messages tab)
    on_sent: Callback<()>,
) -> impl IntoView {
    let app = use_app();
    let lines = RwSignal::new(
        messages
            .into_iter()
            .enumerate()
            .map(|(key, m)| {
                let author = m.display_name.unwrap_or_else(|| "Unknown".to_string());
                Line {
                    key,
                    initials: initials_of(&author),
                    author,
                    time: m.created_at.unwrap_or_default(),
                    content: m.content,
                }
            })
            .collect::<Vec<_>>(),
    );
    let fresh = RwSignal::new(None::<usize>);
    let draft = RwSignal::new(String::new());
    let form_ref = NodeRef::<html::Form>::new();
    let list_ref = NodeRef::<html::Div>::new();

    let send = move || {
        let content = draft.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::send_message(project_id, &content).await {
                Ok(reply) => {
                    draft.set(String::new());
                    let user = app.user.get_value();
                    let key = lines.with_untracked(|l| l.len());
                    lines.update(|l| {
                        l.insert(
                            0,
                            Line {
                                key,
                                author: user.display_name.clone(),
                                initials: user.initials.clone(),
                                time: "Just now".to_string(),
                                content,
                            },
                        )
                    });
                    if let Some(list) = list_ref.get_untracked() {
                        list.set_scroll_top(0);
                    }
                    on_sent.run(());
                    app.toaster.success(&reply.message);
                    fresh.set(Some(key));
                    TimeoutFuture::new(NEW_MESSAGE_MS).await;
                    fresh.set(None);
                }
                Err(e) => app.report(&e, "Error sending message. Please try again."),
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
            ev.prevent_default();
            if let Some(form) = form_ref.get_untracked() {
                let _ = form.request_submit();
            }
        }
    };

    view! {
        <div class="messages-panel">
            <div id="messagesList" class="messages-list" node_ref=list_ref>
                <Show
                    when=move || lines.with(|l| !l.is_empty())
                    fallback=|| view! { <div class="no-messages">"No messages yet. Start the conversation!"</div> }
                >
                    <For
                        each=move || lines.get()
                        key=|line| line.key
                        children=move |line| {
                            let key = line.key;
                            view! {
                                <div class=move || if fresh.get() == Some(key) { "message-item new-message" } else { "message-item" }>
                                    <div class="message-avatar">
                                        <div class="avatar-circle">{line.initials.clone()}</div>
                                    </div>
                                    <div class="message-content">
                                        <div class="message-header">
                                            <span class="message-author">{line.author.clone()}</span>
                                            <span class="message-time">{line.time.clone()}</span>
                                        </div>
                                        <div class="message-text">{line.content.clone()}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
            <form
                id="messageForm"
                class="message-form"
                node_ref=form_ref
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    name="content"
                    class="message-input"
                    placeholder="Type a message... (Ctrl+Enter to send)"
                    required
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="submit" class="btn-send">"Send"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("Ada Lovelace"), "AL");
        assert_eq!(initials_of("grace"), "G");
        assert_eq!(initials_of("Jean Paul Sartre"), "JP");
        assert_eq!(initials_of(""), "");
    }
}
