use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::filter::Filterable;

pub static BLOG_POSTS: LazyLock<Vec<BlogPost>> = LazyLock::new(|| load_or_empty("blog.json"));
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_empty("projects.json"));
pub static JOBS: LazyLock<Vec<Job>> = LazyLock::new(|| load_or_empty("experience.json"));
pub static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| load_or_empty("skills.json"));
pub static CERTIFICATIONS: LazyLock<Vec<Certification>> =
    LazyLock::new(|| load_or_empty("certifications.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published: NaiveDate,
    pub read_minutes: u32,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn published_label(&self) -> String {
        self.published.format("%b %e, %Y").to_string()
    }
}

impl Filterable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub github: String,
    pub demo: String,
}

impl Filterable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.description
    }

    // the project buttons filter by category only
    fn tags(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

impl Skill {
    pub fn width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u16,
    pub credential_id: Option<String>,
}

pub fn load<T: DeserializeOwned>(name: &str) -> Result<Vec<T>, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

fn load_or_empty<T: DeserializeOwned>(name: &str) -> Vec<T> {
    match load(name) {
        Ok(items) => {
            log::debug!("loaded {} entries from {name}", items.len());
            items
        }
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_items, tag_universe, FilterState, ALL_TAG};

    #[test]
    fn test_seed_data_loads() {
        assert_eq!(BLOG_POSTS.len(), 6);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(JOBS.len(), 3);
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(CERTIFICATIONS.len(), 4);
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_missing_file() {
        let res = load::<BlogPost>("nope.json");
        assert!(matches!(res, Err(ContentError::NotFound(_))));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let res = load::<Skill>("blog.json");
        assert!(matches!(res, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_blog_search() {
        let state = FilterState::new("COST", ALL_TAG);
        let posts = filter_items(BLOG_POSTS.as_slice(), &state);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Cloud Cost Optimization Techniques");

        let state = FilterState::new("", "AWS");
        let slugs = filter_items(BLOG_POSTS.as_slice(), &state)
            .into_iter()
            .map(|p| p.slug.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            slugs,
            vec![
                "building-resilient-infrastructure-aws",
                "cloud-cost-optimization-techniques"
            ]
        );
    }

    #[test]
    fn test_project_categories() {
        let categories = tag_universe(PROJECTS.as_slice());
        assert_eq!(
            categories,
            vec!["All", "Full Stack", "DevOps", "Infrastructure", "Automation"]
        );
        let state = FilterState::new("", "DevOps");
        assert_eq!(filter_items(PROJECTS.as_slice(), &state).len(), 2);
    }

    #[test]
    fn test_published_label() {
        let post = &BLOG_POSTS[0];
        assert_eq!(post.published_label(), "Dec 15, 2024");
    }
}
