//! Scroll-linked stacking cards
//!
//! Each card sticks to the top of its own viewport-tall slot. As the
//! viewport scrolls, earlier cards shrink toward their target scale while
//! later ones slide over them.

use std::rc::Rc;

use dioxus::prelude::*;
use gymcoach_core::{ScrollProgress, StackItem, StackLayout};

use crate::context::use_coach;

#[derive(Clone, PartialEq, Debug)]
pub struct StackCard {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
}

impl StackCard {
    pub fn new(eyebrow: &str, title: &str, body: &str) -> Self {
        Self {
            eyebrow: eyebrow.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Inline style for one card at the given scale.
pub fn card_style(item: &StackItem, scale: f64) -> String {
    format!(
        "top: calc(10vh + {}px); transform: scale({:.4}); transform-origin: top center;",
        item.offset_px, scale
    )
}

/// Orders in-flight scroll reads. Each read takes a ticket; only a read
/// holding the newest ticket may update the progress.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
struct ReadTickets {
    issued: u64,
}

impl ReadTickets {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

/// Read scroll metrics from the mounted viewport.
async fn read_progress(viewport: &MountedData) -> Option<ScrollProgress> {
    let offset = viewport.get_scroll_offset().await.ok()?;
    let size = viewport.get_scroll_size().await.ok()?;
    let rect = viewport.get_client_rect().await.ok()?;
    Some(ScrollProgress::from_viewport(
        offset.y,
        size.height,
        rect.size.height,
    ))
}

#[component]
pub fn ScrollStack(cards: Vec<StackCard>) -> Element {
    let coach = use_coach();
    let mut progress = use_signal(|| ScrollProgress::START);
    let mut viewport: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let config = coach
        .read()
        .as_ref()
        .map(|c| c.config().stack)
        .unwrap_or_default();
    let layout = StackLayout::new(cards.len(), config);

    let mut tickets = use_signal(ReadTickets::default);

    let on_scroll = move |_| {
        let Some(mounted) = viewport() else {
            return;
        };
        let ticket = tickets.write().issue();
        spawn(async move {
            let Some(p) = read_progress(&mounted).await else {
                return;
            };
            // Drop readings overtaken by a later scroll event.
            if tickets.peek().is_latest(ticket) {
                progress.set(p);
            }
        });
    };

    let container_height = layout.container_height_vh();
    let scales = layout.scales(progress());
    let slots: Vec<(StackItem, f64, StackCard)> = layout
        .items()
        .iter()
        .zip(scales)
        .zip(cards)
        .map(|((item, scale), card)| (*item, scale, card))
        .collect();

    rsx! {
        div {
            class: "scroll-stack-viewport",
            onmounted: move |e| viewport.set(Some(e.data())),
            onscroll: on_scroll,
            div {
                class: "scroll-stack",
                style: "height: {container_height}vh;",
                for (item, scale, card) in slots {
                    div { key: "{item.index}", class: "stack-card-slot",
                        div {
                            class: "stack-card",
                            style: card_style(&item, scale),
                            p { class: "stack-card-eyebrow", "{card.eyebrow}" }
                            h2 { "{card.title}" }
                            p { "{card.body}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymcoach_core::StackConfig;

    #[test]
    fn card_style_offsets_and_scales() {
        let layout = StackLayout::new(4, StackConfig::default());
        let item = layout.items()[2];
        let style = card_style(&item, 0.9);
        assert!(style.contains("calc(10vh + 50px)"));
        assert!(style.contains("scale(0.9000)"));
    }

    #[test]
    fn only_newest_scroll_read_applies() {
        let mut tickets = ReadTickets::default();
        let stale = tickets.issue();
        let fresh = tickets.issue();

        // The older read finishing last must not win.
        assert!(tickets.is_latest(fresh));
        assert!(!tickets.is_latest(stale));
    }

    #[test]
    fn first_card_style_at_end_of_scroll() {
        let layout = StackLayout::new(4, StackConfig::default());
        let item = layout.items()[0];
        let style = card_style(&item, item.scale_at(1.0));
        assert!(style.contains("calc(10vh + 0px)"));
        assert!(style.contains("scale(0.8500)"));
    }
}
