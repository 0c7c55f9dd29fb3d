use std::sync::{Arc, Mutex};

use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::config::{OWNER, SECTIONS};
use crate::content::BLOG_POSTS;
use crate::filter::tag_universe;
use crate::terminal::{CommandRes, Terminal};
use crate::theme::Theme;

use super::hooks::scroll_to_section;

#[derive(Debug, Clone)]
struct HistState {
    cursor: usize,
    opts: Arc<Vec<String>>,
    index: usize,
}

#[derive(Debug, Clone)]
struct TabState {
    cursor: usize,
    opts: Arc<Vec<String>>,
    index: usize,
}

pub fn section_label(id: &str) -> String {
    if id == "hero" {
        return "Home".to_string();
    }
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn tab_replace(val: &str, new: &str) -> String {
    match val.rfind(' ') {
        Some(i) => format!("{}{}", &val[..i + 1], new),
        None => new.to_string(),
    }
}

#[component]
pub fn Header(
    active: ReadSignal<String>,
    scrolled: ReadSignal<bool>,
    theme: ReadSignal<Theme>,
    on_toggle_theme: Callback<()>,
    on_search: Callback<String>,
) -> impl IntoView {
    let tags = tag_universe(BLOG_POSTS.as_slice());
    let terminal = StoredValue::new(Arc::new(Mutex::new(Terminal::new(&SECTIONS, &tags))));
    let input_ref = NodeRef::<html::Input>::new();
    let (output, set_output) = signal(None::<String>);
    let (is_err, set_is_err) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (hist_state, set_hist_state) = signal(None::<HistState>);
    let (tab_state, set_tab_state) = signal(None::<TabState>);

    let go_to = move |id: &str| {
        scroll_to_section(id);
        set_menu_open(false);
    };

    let handle_res = move |res: CommandRes| {
        set_is_err(res.is_err());
        match res {
            CommandRes::EmptyErr | CommandRes::Nothing => set_output(None),
            CommandRes::Err(s) | CommandRes::Output(s) => set_output(Some(s)),
            CommandRes::Navigate(id) => {
                set_output(None);
                go_to(&id);
            }
            CommandRes::Search(text) => {
                set_output(Some(format!("searching blog for '{text}'")));
                on_search.run(text);
                go_to("blog");
            }
            CommandRes::ToggleTheme => {
                set_output(None);
                on_toggle_theme.run(());
            }
        }
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        let Some(el) = input_ref.get_untracked() else {
            return;
        };
        if ev.meta_key() || ev.alt_key() || ev.ctrl_key() {
            return;
        }
        match ev.key().as_ref() {
            "ArrowUp" => {
                ev.prevent_default();
                set_tab_state(None);
                let HistState {
                    cursor,
                    opts,
                    index,
                } = hist_state.get_untracked().unwrap_or_else(|| {
                    let val = el.value();
                    let opts = terminal.with_value(|t| {
                        t.lock()
                            .expect("should be able to access terminal")
                            .handle_start_hist(&val)
                    });
                    HistState {
                        cursor: val.len(),
                        index: opts.len(),
                        opts: opts.into(),
                    }
                });
                if index == 0 {
                    return;
                }
                let index = index - 1;
                el.set_value(&opts[index]);
                set_hist_state(Some(HistState {
                    cursor,
                    opts,
                    index,
                }));
            }
            "ArrowDown" => {
                set_tab_state(None);
                let Some(HistState {
                    cursor,
                    opts,
                    index,
                }) = hist_state.get_untracked()
                else {
                    return;
                };
                ev.prevent_default();
                let index = index + 1;
                if index >= opts.len() {
                    let val = el.value();
                    el.set_value(val.get(..cursor).unwrap_or_default());
                    set_hist_state(None);
                    return;
                }
                el.set_value(&opts[index]);
                set_hist_state(Some(HistState {
                    cursor,
                    opts,
                    index,
                }));
            }
            "Tab" => {
                let val = el.value();
                if val.is_empty() {
                    return;
                }
                ev.prevent_default();
                set_hist_state(None);
                let next = match tab_state.get_untracked() {
                    Some(TabState {
                        cursor,
                        opts,
                        index,
                    }) => {
                        let index = if ev.shift_key() {
                            (index + opts.len() - 1) % opts.len()
                        } else {
                            (index + 1) % opts.len()
                        };
                        Some(TabState {
                            cursor,
                            opts,
                            index,
                        })
                    }
                    None => {
                        let opts = terminal.with_value(|t| {
                            t.lock()
                                .expect("should be able to access terminal")
                                .handle_start_tab(&val)
                        });
                        (!opts.is_empty()).then(|| TabState {
                            cursor: val.len(),
                            opts: opts.into(),
                            index: 0,
                        })
                    }
                };
                if let Some(ts) = &next {
                    let base = val.get(..ts.cursor).unwrap_or(&val);
                    el.set_value(&tab_replace(base, &ts.opts[ts.index]));
                }
                // a single option is final, nothing to cycle
                set_tab_state(next.filter(|ts| ts.opts.len() > 1));
            }
            "Shift" => {}
            _ => {
                set_tab_state(None);
                set_hist_state(None);
            }
        }
    };

    let nav_items = move || {
        SECTIONS
            .iter()
            .map(|id| {
                let id = *id;
                view! {
                    <button
                        class=move || {
                            if active.get() == id {
                                "text-teal"
                            } else {
                                "text-muted hover:text-teal"
                            }
                        }
                        on:click=move |_| go_to(id)
                    >
                        {section_label(id)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 backdrop-blur-md border-b"
            } else {
                "fixed top-0 inset-x-0 z-50 bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto px-6">
                <div class="flex items-center justify-between h-16">
                    <div class="font-bold text-xl">{OWNER}</div>
                    <nav class="hidden md:flex space-x-8">{nav_items}</nav>
                    <div class="flex items-center space-x-4">
                        <button
                            aria-label="Toggle dark mode"
                            on:click=move |_| on_toggle_theme.run(())
                        >
                            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        </button>
                        <button
                            class="md:hidden"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col space-y-2 py-4 border-t">{nav_items}</nav>
                </Show>
                <form
                    class="pb-3"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let Some(el) = input_ref.get_untracked() else {
                            set_is_err(true);
                            return;
                        };
                        let res = terminal.with_value(|t| {
                            t.lock()
                                .expect("should be able to access terminal")
                                .handle_command(&el.value())
                        });
                        handle_res(res);
                        set_hist_state(None);
                        set_tab_state(None);
                        el.set_value("");
                    }
                >
                    <label class="flex items-center gap-2 font-mono text-sm">
                        <span class=move || {
                            if is_err.get() { "text-red-500" } else { "text-green-500" }
                        }>"➜"</span>
                        <input
                            node_ref=input_ref
                            on:keydown=keydown_handler
                            type="text"
                            autocapitalize="none"
                            placeholder="Type a command (try 'help')"
                            class="w-full bg-transparent focus:outline-none"
                        />
                    </label>
                </form>
                {move || {
                    output
                        .get()
                        .map(|s| {
                            view! {
                                <pre class="mb-3 p-2 rounded-md whitespace-pre-wrap text-sm">{s}</pre>
                            }
                        })
                }}
                {move || {
                    tab_state
                        .get()
                        .map(|ts| {
                            ts.opts
                                .iter()
                                .enumerate()
                                .map(|(i, s)| {
                                    let class = if i == ts.index { "bg-white text-black" } else { "" };
                                    view! { <span class=class>{s.clone()}</span> "  " }
                                })
                                .collect_view()
                        })
                }}
            </div>
        </header>
    }
}
