use crate::config::TrackerConfig;

/// Half-open vertical range `[top, bottom)` in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// Looks up where a section currently sits on the page.
/// `None` means the section is not mounted and must be skipped.
pub trait SectionGeometry {
    fn extent(&self, id: &str) -> Option<Extent>;
}

impl<F> SectionGeometry for F
where
    F: Fn(&str) -> Option<Extent>,
{
    fn extent(&self, id: &str) -> Option<Extent> {
        self(id)
    }
}

impl SectionGeometry for [(&str, Extent)] {
    fn extent(&self, id: &str) -> Option<Extent> {
        self.iter().find(|(s, _)| *s == id).map(|(_, e)| *e)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<String>,
    header_offset: f64,
    scrolled_threshold: f64,
    active: String,
    is_scrolled: bool,
    last_offset: Option<f64>,
}

impl ScrollTracker {
    /// The first section is active until a scroll event says otherwise.
    pub fn new<S: AsRef<str>>(sections: &[S], config: &TrackerConfig) -> Self {
        let sections = sections
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>();
        let active = sections.first().cloned().unwrap_or_default();
        Self {
            sections,
            header_offset: config.header_offset.max(0.0),
            scrolled_threshold: config.scrolled_threshold,
            active,
            is_scrolled: false,
            last_offset: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Forces the next scroll event to rescan even if the offset is unchanged.
    pub fn invalidate_layout(&mut self) {
        self.last_offset = None;
    }

    /// Returns true if the active section changed.
    pub fn on_scroll<G: SectionGeometry + ?Sized>(&mut self, offset: f64, geometry: &G) -> bool {
        let offset = offset.max(0.0);
        if self.last_offset == Some(offset) {
            return false;
        }
        self.last_offset = Some(offset);
        self.is_scrolled = offset > self.scrolled_threshold;

        let effective = offset + self.header_offset;
        let hit = self.sections.iter().find(|id| {
            geometry
                .extent(id)
                .is_some_and(|extent| extent.contains(effective))
        });
        match hit {
            Some(id) if *id != self.active => {
                log::debug!("active section {} -> {id}", self.active);
                self.active = id.clone();
                true
            }
            _ => false,
        }
    }
}
