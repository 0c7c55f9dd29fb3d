use leptos::{html::Input, prelude::*};

use crate::content::{BlogPost, BLOG_POSTS};
use crate::filter::ContentFilter;

#[component]
pub fn Blog(search: ReadSignal<String>, on_search: Callback<String>) -> impl IntoView {
    let filter = RwSignal::new(ContentFilter::new(BLOG_POSTS.as_slice()));
    let input_ref = NodeRef::<Input>::new();

    // the terminal can change the search too, so keep the box and filter in sync
    Effect::watch(
        move || search.get(),
        move |text, _, _| {
            filter.update(|f| f.set_search(text.clone()));
            if let Some(el) = input_ref.get_untracked() {
                if el.value() != *text {
                    el.set_value(text);
                }
            }
        },
        true,
    );

    let tag_buttons = move || {
        filter.with(|f| {
            f.tags()
                .iter()
                .map(|tag| {
                    let tag = tag.clone();
                    let selected = f.state().selected_tag == tag;
                    let class = if selected {
                        "px-4 py-2 rounded-2xl text-sm font-medium bg-blue-500 text-white"
                    } else {
                        "px-4 py-2 rounded-2xl text-sm font-medium bg-gray-800 text-gray-300"
                    };
                    view! {
                        <button
                            class=class
                            on:click={
                                let tag = tag.clone();
                                move |_| {
                                    filter
                                        .update(|f| {
                                            if let Err(e) = f.select_tag(&tag) {
                                                log::warn!("{e}");
                                            }
                                        })
                                }
                            }
                        >
                            {tag.clone()}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="blog" class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Latest " <span class="text-blue-500">"Insights"</span>
                    </h2>
                    <p class="text-xl max-w-2xl mx-auto text-muted">
                        "Sharing knowledge about cloud architecture, DevOps practices, and lessons learned from real-world projects."
                    </p>
                </div>
                <div class="mb-12">
                    <div class="max-w-md mx-auto mb-8">
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Search articles..."
                            class="w-full px-4 py-4 rounded-2xl border focus:outline-none focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| on_search.run(event_target_value(&ev))
                        />
                    </div>
                    <p class="text-center mb-4 font-medium text-muted">"Filter by tag:"</p>
                    <div class="flex flex-wrap justify-center gap-3">{tag_buttons}</div>
                </div>
                {move || {
                    let posts = filter.with(|f| f.visible());
                    if posts.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-lg mb-4 text-muted">
                                    "No articles found matching your criteria."
                                </p>
                                <button
                                    class="px-4 py-2 rounded-2xl text-sm font-medium border-2 border-teal text-teal"
                                    on:click=move |_| {
                                        filter.update(|f| f.reset());
                                        on_search.run(String::new());
                                    }
                                >
                                    "Clear filters"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {posts.into_iter().map(|post| view! { <PostCard post /> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="rounded-3xl overflow-hidden shadow-lg p-6">
            <span class="px-3 py-1 bg-blue-500 text-white text-xs font-medium rounded-full">
                {post.category.as_str()}
            </span>
            <h3 class="text-xl font-bold my-3">{post.title.as_str()}</h3>
            <p class="text-sm mb-4 text-muted">{post.excerpt.as_str()}</p>
            <div class="flex items-center justify-between text-xs mb-4 text-muted">
                <span>{post.published_label()}</span>
                <span>{format!("{} min read", post.read_minutes)}</span>
            </div>
            <div class="flex flex-wrap gap-2">
                {post
                    .tags
                    .iter()
                    .take(2)
                    .map(|tag| view! { <span class="px-2 py-1 text-xs rounded-lg">{tag.as_str()}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
