use dioxus::prelude::*;

use crate::notify::NoticeFeed;

/// Toast stack for the notice feed. Clicking a toast dismisses it early;
/// otherwise [`crate::notify::notify`] retires it after a few seconds.
#[component]
pub fn NoticeStack(feed: Signal<NoticeFeed>) -> Element {
    let notices: Vec<(u64, String)> = feed
        .read()
        .notices()
        .iter()
        .map(|n| (n.id, n.text.clone()))
        .collect();

    rsx! {
        div { class: "notice-stack",
            for (id, text) in notices {
                div {
                    class: "notice",
                    onclick: move |_| feed.write().dismiss(id),
                    "{text}"
                }
            }
        }
    }
}
