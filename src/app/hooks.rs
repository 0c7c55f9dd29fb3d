use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::config::TrackerConfig;
use crate::reveal::RevealTracker;
use crate::scroll::ScrollTracker;
#[cfg(feature = "hydrate")]
use crate::scroll::{Extent, SectionGeometry};
use crate::subscription::Subscription;

/// Reads section extents from the live DOM.
#[cfg(feature = "hydrate")]
struct DomGeometry;

#[cfg(feature = "hydrate")]
impl SectionGeometry for DomGeometry {
    fn extent(&self, id: &str) -> Option<Extent> {
        use wasm_bindgen::JsCast;

        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<leptos::web_sys::HtmlElement>()
            .ok()?;
        Some(Extent::new(el.offset_top() as f64, el.offset_height() as f64))
    }
}

pub fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no section with id {id}"),
    }
}

/// Active section id and whether the page has scrolled past the header.
pub fn use_scroll_spy(
    sections: &[&str],
    config: &TrackerConfig,
) -> (ReadSignal<String>, ReadSignal<bool>) {
    let tracker = StoredValue::new(ScrollTracker::new(sections, config));
    let (active, set_active) = signal(tracker.with_value(|t| t.active().to_string()));
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let on_scroll = move || {
            let offset = window().scroll_y().unwrap_or_default();
            tracker.update_value(|t| {
                if t.on_scroll(offset, &DomGeometry) {
                    set_active(t.active().to_string());
                }
                if scrolled.get_untracked() != t.is_scrolled() {
                    set_scrolled(t.is_scrolled());
                }
            });
        };
        let scroll = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            tracker.update_value(|t| t.invalidate_layout());
            on_scroll();
        });
        let mut subscription = Subscription::new(move || {
            scroll.remove();
            resize.remove();
        });
        on_cleanup(move || subscription.unsubscribe());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_active, set_scrolled);

    (active, scrolled)
}

/// Shared reveal state for one rendered list.
pub fn use_reveal(len: usize, config: &TrackerConfig) -> RwSignal<RevealTracker> {
    RwSignal::new(RevealTracker::new(len, config))
}

/// Wraps one list item and marks it seen the first time it scrolls into view.
#[component]
pub fn Reveal(
    index: usize,
    tracker: RwSignal<RevealTracker>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let seen = Memo::new(move |_| tracker.with(|t| t.is_seen(index)));
    let (threshold, delay) =
        tracker.with_untracked(|t| (t.threshold(), t.stagger_delay(index).as_millis()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let (intersecting, ratio) = (entry.is_intersecting(), entry.intersection_ratio());
                tracker.maybe_update(|t| t.observe_entry(index, intersecting, ratio));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    let observer = StoredValue::new(Subscription::new(stop));
    Effect::new(move |_| {
        if seen.get() {
            observer.update_value(|s| s.unsubscribe());
        }
    });

    view! {
        <div
            node_ref=node
            data-index=index.to_string()
            class=move || {
                let state = if seen.get() { "revealed" } else { "unrevealed" };
                format!("reveal {state} {class}")
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
