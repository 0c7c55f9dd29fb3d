mod blog;
mod header;
mod hero;
mod hooks;
mod projects;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::config::{TrackerConfig, SECTIONS};
use crate::theme::Theme;

use blog::Blog;
use header::Header;
use hero::Hero;
use hooks::use_scroll_spy;
use projects::Projects;
use sections::{About, Contact, Experience, Footer, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Aarav Patel - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Owns the page-wide state (theme, active section, blog search) and hands
/// children read-only signals plus callbacks.
#[component]
fn HomePage() -> impl IntoView {
    let config = TrackerConfig::default();
    let (theme, set_theme) = signal(Theme::default());
    let (search, set_search) = signal(String::new());
    let (active, scrolled) = use_scroll_spy(&SECTIONS, &config);

    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| set_theme(stored_theme.get_untracked()),
        true,
    );

    let on_toggle_theme = Callback::new(move |_: ()| {
        let next = theme.get_untracked().toggle();
        log::debug!("theme -> {next:?}");
        set_theme(next);
        #[cfg(feature = "hydrate")]
        set_stored_theme.set(next);
    });

    let on_search = Callback::new(move |text: String| set_search(text));

    view! {
        <Title text="Cloud & DevOps Engineer" />
        <div class=move || {
            let theme = theme.get();
            if theme.is_dark() {
                format!("{} min-h-screen bg-navy text-white", theme.class())
            } else {
                format!("{} min-h-screen bg-white text-gray-900", theme.class())
            }
        }>
            <Header active scrolled theme on_toggle_theme on_search />
            <main>
                <Hero config=config.clone() />
                <About />
                <Experience config=config.clone() />
                <Projects config=config.clone() />
                <Blog search on_search />
                <Skills config=config.clone() />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
