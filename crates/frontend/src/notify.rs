//! Fire-and-forget user notices.
//!
//! The original widget used a blocking alert for the relocation message;
//! here notices go onto a feed rendered as toasts and auto-dismissed, so
//! pushing one never suspends the caller.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

pub const NOTICE_VISIBLE_MS: u32 = 6_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeFeed {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeFeed {
    pub fn push(&mut self, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, text });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Push a notice and schedule its dismissal. Returns immediately.
pub fn notify(mut feed: Signal<NoticeFeed>, text: String) {
    let id = feed.write().push(text);
    spawn(async move {
        TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
        feed.write().dismiss(id);
    });
}

/// Message shown when a click is relocated to the nearest road.
pub fn snap_notice(distance_meters: f64, message: &str) -> String {
    let mut text = format!("Relocated to nearest road ({:.1}m away).", distance_meters);
    if !message.is_empty() {
        text.push(' ');
        text.push_str(message);
    }
    text
}
