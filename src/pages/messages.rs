//! Messages Page
//!
//! Conversation sidebar with search and selection, plus a chat pane. The
//! composer is a stub: sending logs the draft to the console and clears it;
//! there is no transport in this build.

use leptos::*;

use crate::components::Layout;
use crate::filter::ListFilter;
use crate::model::{ChatMessage, Conversation, MessageSender};
use crate::state::expect_state;

fn search_fields(c: &Conversation) -> Vec<String> {
    vec![c.name.clone()]
}

/// Messages page component
#[component]
pub fn Messages() -> impl IntoView {
    let state = expect_state();

    let (search, set_search) = create_signal(String::new());
    let first = state
        .conversations
        .get_untracked()
        .first()
        .cloned()
        .expect("conversation list is never empty in this build");
    let (selected, set_selected) = create_signal(first);
    let (draft, set_draft) = create_signal(String::new());

    let conversations = state.conversations;
    let filtered =
        move || ListFilter::new(&search.get()).apply(&conversations.get(), search_fields);

    let send = move || {
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        // Stub transport; a real build would hand this to a messaging API.
        web_sys::console::log_1(&format!("Message sent: {text}").into());
        set_draft.set(String::new());
    };

    let send_on_click = send.clone();

    view! {
        <Layout>
            <div class="flex flex-col">
                <h1 class="text-3xl font-bold tracking-tight mb-6">"Messages"</h1>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 flex-1">
                    // Conversation list
                    <div class="col-span-1 bg-white rounded-xl border border-gray-200 p-4 flex flex-col">
                        <div class="flex items-center justify-between mb-2">
                            <h2 class="text-xl font-semibold">"Conversations"</h2>
                            <button class="px-2 py-1 border rounded-md hover:bg-gray-50">"👥"</button>
                        </div>
                        <input
                            type="search"
                            placeholder="Search conversations..."
                            class="border rounded-md px-3 py-2 mb-3"
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />

                        <ul class="space-y-2 overflow-y-auto">
                            {move || {
                                let rows = filtered();
                                if rows.is_empty() {
                                    view! {
                                        <li class="p-3 text-sm text-muted-foreground">"No conversations found"</li>
                                    }.into_view()
                                } else {
                                    rows.into_iter()
                                        .map(|conversation| {
                                            let choice = conversation.clone();
                                            let conversation_id = conversation.id;
                                            let is_selected = move || selected.get().id == conversation_id;
                                            view! {
                                                <li
                                                    class=move || {
                                                        if is_selected() {
                                                            "p-3 rounded-md cursor-pointer bg-healthcare-purple/10 border border-healthcare-purple/30"
                                                        } else {
                                                            "p-3 rounded-md cursor-pointer hover:bg-gray-100"
                                                        }
                                                    }
                                                    on:click=move |_| set_selected.set(choice.clone())
                                                >
                                                    <ConversationPreview conversation=conversation.clone() />
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }
                            }}
                        </ul>
                    </div>

                    // Chat pane
                    <div class="col-span-2 bg-white rounded-xl border border-gray-200 flex flex-col">
                        <div class="border-b p-4 flex items-center gap-3">
                            <Avatar initials=Signal::derive(move || selected.get().avatar) />
                            <div>
                                <h2 class="text-xl font-semibold">{move || selected.get().name}</h2>
                                <p class="text-sm text-gray-500">"Patient"</p>
                            </div>
                        </div>

                        <div class="flex-1 overflow-y-auto p-4 space-y-4">
                            {move || {
                                state
                                    .chat_messages
                                    .get()
                                    .into_iter()
                                    .map(|message| view! { <MessageBubble message=message /> })
                                    .collect_view()
                            }}
                        </div>

                        // Composer
                        <div class="p-4 border-t">
                            <div class="flex gap-2">
                                <textarea
                                    placeholder="Type your message..."
                                    class="flex-1 border rounded-md px-3 py-2 resize-none"
                                    prop:value=move || draft.get()
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" && !ev.shift_key() {
                                            ev.prevent_default();
                                            send();
                                        }
                                    }
                                />
                                <button
                                    class="self-end px-4 py-2 bg-healthcare-purple hover:bg-healthcare-dark-purple text-white rounded-lg font-medium transition-colors"
                                    on:click=move |_| send_on_click()
                                >
                                    "Send"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn ConversationPreview(conversation: Conversation) -> impl IntoView {
    let preview_style = if conversation.unread {
        "text-sm truncate font-semibold"
    } else {
        "text-sm truncate text-gray-500"
    };

    view! {
        <div class="flex items-start gap-3">
            <Avatar initials=conversation.avatar.clone() />
            <div class="flex-1 min-w-0">
                <div class="flex justify-between">
                    <p class="text-sm font-medium text-gray-900 truncate">{conversation.name.clone()}</p>
                    <p class="text-xs text-gray-500">{conversation.timestamp.clone()}</p>
                </div>
                <p class=preview_style>{conversation.last_message.clone()}</p>
            </div>
            {conversation
                .unread
                .then(|| view! { <span class="inline-block h-2 w-2 rounded-full bg-healthcare-purple" /> })}
        </div>
    }
}

#[component]
fn Avatar(#[prop(into)] initials: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="flex-shrink-0 h-10 w-10 rounded-full bg-healthcare-purple text-white flex items-center justify-center font-semibold">
            {move || initials.get()}
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (align, bubble) = match message.sender {
        MessageSender::Doctor => ("flex justify-start", "bg-gray-100 text-gray-800"),
        MessageSender::Patient => ("flex justify-end", "bg-healthcare-purple text-white"),
    };

    view! {
        <div class=align>
            <div class=format!("max-w-[80%] rounded-lg px-4 py-2 {}", bubble)>
                <p>{message.text}</p>
                <p class="text-xs mt-1 opacity-70">{message.timestamp}</p>
            </div>
        </div>
    }
}
