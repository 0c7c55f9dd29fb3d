use leptos::prelude::*;

use crate::config::TrackerConfig;
use crate::content::{Project, PROJECTS};
use crate::filter::ContentFilter;

use super::hooks::{use_reveal, Reveal};

#[component]
pub fn Projects(config: TrackerConfig) -> impl IntoView {
    let filter = RwSignal::new(ContentFilter::new(PROJECTS.as_slice()));

    let category_buttons = move || {
        filter.with(|f| {
            f.tags()
                .iter()
                .map(|category| {
                    let category = category.clone();
                    let selected = f.state().selected_tag == category;
                    view! {
                        <button
                            class=if selected {
                                "px-6 py-3 rounded-2xl font-medium bg-blue-500 text-white"
                            } else {
                                "px-6 py-3 rounded-2xl font-medium bg-gray-800 text-gray-300"
                            }
                            on:click={
                                let category = category.clone();
                                move |_| {
                                    filter
                                        .update(|f| {
                                            if let Err(e) = f.select_tag(&category) {
                                                log::warn!("{e}");
                                            }
                                        })
                                }
                            }
                        >
                            {category.clone()}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="projects" class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Featured " <span class="text-blue-500">"Projects"</span>
                    </h2>
                    <p class="text-xl max-w-3xl mx-auto text-muted">
                        "A showcase of cloud infrastructure, automation tools, and DevOps solutions I've architected and built."
                    </p>
                </div>
                <p class="text-center mb-4 font-medium text-muted">"Filter by category:"</p>
                <div class="flex flex-wrap justify-center gap-4 mb-12">{category_buttons}</div>
                {move || {
                    // a new reveal tracker per selection so the cards transition in again
                    let projects = filter.with(|f| f.visible());
                    let tracker = use_reveal(projects.len(), &config);
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {projects
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! {
                                        <Reveal index tracker>
                                            <ProjectCard project />
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let extra = project.technologies.len().saturating_sub(3);
    view! {
        <div class="rounded-3xl overflow-hidden shadow-lg p-6">
            <div class="flex items-center justify-between mb-3">
                <span class="px-3 py-1 rounded-full text-xs font-medium">
                    {project.category.as_str()}
                </span>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="px-3 py-1 bg-teal text-white text-xs font-medium rounded-full">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <h3 class="text-xl font-bold mb-3">{project.title.as_str()}</h3>
            <p class="mb-6 leading-relaxed text-muted">{project.description.as_str()}</p>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .technologies
                    .iter()
                    .take(3)
                    .map(|tech| view! { <span class="px-3 py-1 text-sm rounded-lg">{tech.as_str()}</span> })
                    .collect_view()}
                {(extra > 0).then(|| view! { <span class="px-3 py-1 text-sm rounded-lg">{format!("+{extra}")}</span> })}
            </div>
            <div class="flex gap-4 text-sm">
                <a href=project.github.as_str() target="_blank" rel="noopener noreferrer">
                    "Source"
                </a>
                <a href=project.demo.as_str() target="_blank" rel="noopener noreferrer">
                    "Demo"
                </a>
            </div>
        </div>
    }
}
