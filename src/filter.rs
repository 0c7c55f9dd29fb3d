use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ALL_TAG: &str = "All";

/// Anything that can be narrowed by the search box and the tag buttons.
pub trait Filterable {
    fn title(&self) -> &str;
    fn body(&self) -> &str;
    fn tags(&self) -> Vec<&str>;

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }
}

/// Plain title/body/tags record, used where no richer type is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Filterable for ContentItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown tag: {0}")]
    UnknownTag(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub selected_tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_tag: ALL_TAG.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(search_text: impl Into<String>, selected_tag: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            selected_tag: selected_tag.into(),
        }
    }

    fn tag_filter(&self) -> Option<&str> {
        let tag = self.selected_tag.trim();
        if tag.is_empty() || tag == ALL_TAG {
            None
        } else {
            Some(tag)
        }
    }

    fn search_filter(&self) -> Option<String> {
        if self.search_text.is_empty() {
            None
        } else {
            Some(self.search_text.to_lowercase())
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.tag_filter().is_none() && self.search_filter().is_none()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let tag_ok = self.tag_filter().is_none_or(|tag| item.has_tag(tag));
        tag_ok
            && self.search_filter().is_none_or(|needle| {
                item.title().to_lowercase().contains(&needle)
                    || item.body().to_lowercase().contains(&needle)
            })
    }
}

/// Ordered subsequence of `items` that passes `state`.
pub fn filter_items<'a, T: Filterable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    if state.is_unfiltered() {
        return items.iter().collect();
    }
    items.iter().filter(|item| state.matches(*item)).collect()
}

/// "All" followed by every distinct tag in first-seen order.
pub fn tag_universe<T: Filterable>(items: &[T]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_string()];
    for item in items {
        for tag in item.tags() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

/// Owns a static item list, its tag universe and the current filter state.
#[derive(Debug, Clone)]
pub struct ContentFilter<'a, T> {
    items: &'a [T],
    tags: Vec<String>,
    state: FilterState,
}

impl<'a, T: Filterable> ContentFilter<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            tags: tag_universe(items),
            state: FilterState::default(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Rejects tags outside the universe so the selection always names a button.
    /// A blank tag resets to "All".
    pub fn select_tag(&mut self, tag: &str) -> Result<(), FilterError> {
        let tag = tag.trim();
        if tag.is_empty() {
            self.state.selected_tag = ALL_TAG.to_string();
            return Ok(());
        }
        if !self.tags.iter().any(|t| t == tag) {
            return Err(FilterError::UnknownTag(tag.to_string()));
        }
        self.state.selected_tag = tag.to_string();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    pub fn visible(&self) -> Vec<&'a T> {
        filter_items(self.items, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, body: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fixture() -> Vec<ContentItem> {
        vec![
            item(
                "Building Resilient Infrastructure with AWS",
                "Designing fault-tolerant systems.",
                &["AWS", "Architecture"],
            ),
            item(
                "Kubernetes Security Best Practices",
                "Hardening clusters.",
                &["Kubernetes", "Security"],
            ),
            item(
                "Terraform Modules",
                "Reusable configurations.",
                &["Terraform", "Automation"],
            ),
            item(
                "Helm Charts in Production",
                "Packaging workloads for clusters.",
                &["Kubernetes", "DevOps"],
            ),
            item(
                "Monitoring Microservices",
                "Prometheus and Grafana.",
                &["Monitoring"],
            ),
            item(
                "AWS Cost Optimization Techniques",
                "Spend less on the cloud.",
                &["AWS", "Cloud"],
            ),
        ]
    }

    fn titles(items: Vec<&ContentItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_default_state_returns_everything() {
        let items = fixture();
        let filtered = filter_items(&items, &FilterState::default());
        assert_eq!(filtered.len(), items.len());
        assert!(filtered.iter().zip(items.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_tag_filter_keeps_order() {
        let items = fixture();
        let state = FilterState::new("", "Kubernetes");
        assert_eq!(
            titles(filter_items(&items, &state)),
            vec![
                "Kubernetes Security Best Practices",
                "Helm Charts in Production"
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = fixture();
        let state = FilterState::new("COST", ALL_TAG);
        assert_eq!(
            titles(filter_items(&items, &state)),
            vec!["AWS Cost Optimization Techniques"]
        );

        // body matches count too
        let state = FilterState::new("grafana", ALL_TAG);
        assert_eq!(
            titles(filter_items(&items, &state)),
            vec!["Monitoring Microservices"]
        );
    }

    #[test]
    fn test_search_and_tag_are_conjunctive() {
        let items = fixture();
        let state = FilterState::new("clusters", "Security");
        assert_eq!(
            titles(filter_items(&items, &state)),
            vec!["Kubernetes Security Best Practices"]
        );
        let state = FilterState::new("terraform", "Kubernetes");
        assert!(filter_items(&items, &state).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = fixture();
        let state = FilterState::new("a", "AWS");
        let once = filter_items(&items, &state)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = filter_items(&once, &state)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blank_tag_means_no_tag_filter() {
        let items = fixture();
        let state = FilterState::new("", "  ");
        assert_eq!(filter_items(&items, &state).len(), items.len());
    }

    #[test]
    fn test_tag_universe() {
        let items = fixture();
        let tags = tag_universe(&items);
        assert_eq!(tags[0], ALL_TAG);
        assert_eq!(tags[1], "AWS");
        assert_eq!(tags.iter().filter(|t| *t == "Kubernetes").count(), 1);
        assert_eq!(tags.len(), 10);
    }

    #[test]
    fn test_select_unknown_tag_keeps_state() {
        let items = fixture();
        let mut filter = ContentFilter::new(&items);
        filter.select_tag("Kubernetes").unwrap();
        let err = filter.select_tag("Rust").unwrap_err();
        assert_eq!(err, FilterError::UnknownTag("Rust".to_string()));
        assert_eq!(filter.state().selected_tag, "Kubernetes");
        assert_eq!(filter.visible().len(), 2);

        filter.select_tag("").unwrap();
        assert_eq!(filter.state().selected_tag, ALL_TAG);
    }

    #[test]
    fn test_filtering_does_not_touch_source() {
        let items = fixture();
        let before = items.clone();
        let mut filter = ContentFilter::new(&items);
        filter.set_search("zzz");
        assert!(filter.visible().is_empty());
        filter.reset();
        assert_eq!(filter.visible().len(), before.len());
        assert_eq!(items, before);
    }

    #[test]
    fn test_reset_clears_search_and_tag() {
        let items = fixture();
        let mut filter = ContentFilter::new(&items);
        filter.set_search("cost");
        filter.select_tag("Kubernetes").unwrap();
        assert!(filter.visible().is_empty());

        filter.reset();
        assert_eq!(filter.state(), &FilterState::default());
        assert_eq!(filter.visible().len(), items.len());
    }
}
