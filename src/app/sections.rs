use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::config::{TrackerConfig, OWNER};
use crate::content::{CERTIFICATIONS, JOBS, SKILLS};

use super::hooks::{use_reveal, Reveal};

const BUILD_TIME: &str = env!("BUILD_TIME");
const EMAIL: &str = "aarav.patel@example.com";

const CORE_TOOLS: [&str; 6] = ["AWS", "Kubernetes", "Terraform", "Jenkins", "Docker", "Python"];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://linkedin.com"),
    ("GitHub", "https://github.com"),
    ("Twitter", "https://twitter.com"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24">
            <div class="max-w-6xl mx-auto px-6 grid lg:grid-cols-2 gap-16 items-center">
                <div>
                    <h2 class="text-4xl md:text-5xl font-bold mb-8">
                        "About " <span class="text-teal">"Me"</span>
                    </h2>
                    <p class="text-lg mb-6 leading-relaxed text-muted">
                        "I'm a Cloud & DevOps Engineer passionate about designing resilient cloud architectures, automating CI/CD workflows, and building secure infrastructure on AWS and Kubernetes."
                    </p>
                    <p class="text-lg mb-8 leading-relaxed text-muted">
                        "I enjoy simplifying complex cloud problems through automation and clean design. My approach focuses on creating scalable, maintainable solutions that empower teams to deploy with confidence."
                    </p>
                    <ul class="space-y-2">
                        <li>"Infrastructure as Code & Automation"</li>
                        <li>"Cloud Security & Best Practices"</li>
                        <li>"Continuous Learning & Innovation"</li>
                    </ul>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                    {CORE_TOOLS
                        .iter()
                        .map(|tool| {
                            view! { <div class="p-6 rounded-2xl text-center font-semibold">{*tool}</div> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience(config: TrackerConfig) -> impl IntoView {
    let tracker = use_reveal(JOBS.len(), &config);
    view! {
        <section id="experience" class="py-24">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Work " <span class="text-teal">"Experience"</span>
                    </h2>
                    <p class="text-xl max-w-3xl mx-auto text-muted">
                        "Building scalable infrastructure and leading DevOps transformations across diverse environments."
                    </p>
                </div>
                <div class="space-y-12">
                    {JOBS
                        .iter()
                        .enumerate()
                        .map(|(index, job)| {
                            view! {
                                <Reveal index tracker class="p-8 rounded-3xl shadow-lg">
                                    <h3 class="text-2xl font-bold mb-2">{job.role.as_str()}</h3>
                                    <h4 class="text-xl text-teal font-semibold mb-2">
                                        {job.company.as_str()}
                                    </h4>
                                    <div class="flex gap-4 mb-6 text-sm text-muted">
                                        <span>{job.duration.as_str()}</span>
                                        <span>{job.location.as_str()}</span>
                                    </div>
                                    <ul class="space-y-3">
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|item| view! { <li class="leading-relaxed">{item.as_str()}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(config: TrackerConfig) -> impl IntoView {
    let certs = use_reveal(CERTIFICATIONS.len(), &config);
    let skills = use_reveal(SKILLS.len(), &config);
    view! {
        <section id="skills" class="py-24">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Skills & " <span class="text-teal">"Certifications"</span>
                    </h2>
                    <p class="text-xl max-w-3xl mx-auto text-muted">
                        "Continuous learning and professional development in cloud technologies and DevOps practices."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16">
                    <div>
                        <h3 class="text-2xl font-bold mb-8">"Certifications"</h3>
                        <div class="space-y-6">
                            {CERTIFICATIONS
                                .iter()
                                .enumerate()
                                .map(|(index, cert)| {
                                    view! {
                                        <Reveal index tracker=certs class="p-6 rounded-2xl">
                                            <h4 class="font-bold text-lg mb-2">{cert.name.as_str()}</h4>
                                            <p class="text-sm mb-2 text-muted">{cert.issuer.as_str()}</p>
                                            <div class="flex items-center gap-4 text-sm">
                                                <span>{cert.year}</span>
                                                {cert
                                                    .credential_id
                                                    .as_deref()
                                                    .map(|id| {
                                                        view! { <span class="px-2 py-1 rounded text-teal">{id}</span> }
                                                    })}
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold mb-8">"Technical Skills"</h3>
                        <div class="space-y-6">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(index, skill)| {
                                    let width = move || {
                                        let pct = if skills.with(|t| t.is_seen(index)) {
                                            skill.width_percent()
                                        } else {
                                            0
                                        };
                                        format!("width: {pct}%")
                                    };
                                    view! {
                                        <Reveal index tracker=skills>
                                            <div class="flex justify-between mb-2">
                                                <span class="font-semibold">{skill.name.as_str()}</span>
                                                <span class="text-sm text-muted">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="w-full h-2 rounded-full bg-gray-700">
                                                <div
                                                    class="h-2 rounded-full bg-teal transition-all duration-1000"
                                                    style=width
                                                ></div>
                                            </div>
                                            <p class="text-xs mt-1 text-muted">{skill.category.as_str()}</p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Form fields as (name, label, input type, placeholder). A "textarea" type
/// renders a multi-line field.
const CONTACT_FIELDS: [(&str, &str, &str, &str); 3] = [
    ("name", "Name", "text", "Your name"),
    ("email", "Email", "email", "your.email@example.com"),
    ("message", "Message", "textarea", "Tell me about your project or just say hello!"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let fields = CONTACT_FIELDS
        .iter()
        .map(|(name, label, kind, placeholder)| {
            let class = "field w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2";
            let input = if *kind == "textarea" {
                view! { <textarea id=*name name=*name rows="5" required placeholder=*placeholder class=class></textarea> }
                    .into_any()
            } else {
                view! { <input id=*name type=*kind name=*name required placeholder=*placeholder class=class /> }
                    .into_any()
            };
            view! {
                <div>
                    <label for=*name class="block text-sm font-medium mb-2 text-muted">
                        {*label}
                    </label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="py-24">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Let's " <span class="text-teal">"Connect"</span>
                    </h2>
                    <p class="text-xl max-w-2xl mx-auto text-muted">
                        "Have a project in mind or want to talk cloud infrastructure? Reach out."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div class="flex flex-col gap-4">
                            <a href=format!("mailto:{EMAIL}") class="text-lg text-teal">
                                {EMAIL}
                            </a>
                            <span class="text-muted">"San Francisco, CA"</span>
                        </div>
                        <div class="flex gap-6">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*name>
                                            {*name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    // handed to the visitor's mail client, nothing is sent from the site
                    <form
                        action=format!("mailto:{EMAIL}")
                        method="post"
                        enctype="text/plain"
                        class="p-8 rounded-xl space-y-6"
                    >
                        {fields}
                        <button
                            type="submit"
                            class="w-full py-4 px-6 rounded-lg bg-teal text-white font-medium"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year().map(|y| y.to_string()).unwrap_or_default();
    view! {
        <footer class="py-12 border-t">
            <div class="max-w-6xl mx-auto px-6 text-center text-sm text-muted">
                <p>{format!("© {year} {OWNER}. All rights reserved.")}</p>
                <p class="mt-2">"Rust + Leptos + Tailwind CSS"</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }

    #[test]
    fn test_contact_fields() {
        let names: Vec<_> = CONTACT_FIELDS.iter().map(|(name, ..)| *name).collect();
        assert_eq!(names, ["name", "email", "message"]);
        assert!(CONTACT_FIELDS
            .iter()
            .all(|(_, label, _, placeholder)| !label.is_empty() && !placeholder.is_empty()));
        assert_eq!(CONTACT_FIELDS[1].2, "email");
    }
}
