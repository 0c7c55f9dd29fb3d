use leptos::prelude::*;

use crate::config::{TrackerConfig, HERO_PHRASES, OWNER};
use crate::subscription::Subscription;
use crate::typewriter::Typewriter;

use super::hooks::scroll_to_section;

#[component]
pub fn Hero(config: TrackerConfig) -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(&HERO_PHRASES, &config));
    let (text, set_text) = signal(String::new());

    // effects only run in the browser, so the timer never starts during SSR
    Effect::new(move |_| {
        text.track();
        let delay = typewriter.with_value(|t| t.next_delay());
        let handle = set_timeout_with_handle(
            move || {
                typewriter.update_value(|t| {
                    t.tick();
                    set_text(t.text().to_string());
                });
            },
            delay,
        );
        match handle {
            Ok(handle) => {
                let mut timer = Subscription::new(move || handle.clear());
                on_cleanup(move || timer.unsubscribe());
            }
            Err(e) => log::error!("couldn't schedule typewriter: {e:?}"),
        }
    });

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center pt-16">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Hi, I'm " <span class="text-teal">{OWNER}</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-muted">
                    "Cloud & DevOps Engineer building secure, scalable, and automated cloud infrastructure."
                </p>
                <div class="h-8 mb-12 font-mono text-lg">
                    <span>{move || text.get()}</span>
                    <span class="animate-pulse">"|"</span>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="px-8 py-4 rounded-2xl bg-teal text-white font-medium"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Contact Me"
                    </button>
                    <button
                        class="px-8 py-4 rounded-2xl border-2 border-teal text-teal font-medium"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                </div>
            </div>
        </section>
    }
}
