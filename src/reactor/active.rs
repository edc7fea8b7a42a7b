//! Active section tracking for the navigation links.

/// Offset subtracted from a section's top when matching the scroll offset,
/// so a section becomes active slightly before it reaches the top edge.
pub const DEFAULT_HEADER_OFFSET: i64 = 100;

/// Vertical extent of a labeled page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionExtent {
    /// Anchor id of the section
    pub id: String,
    /// Offset of the first row from the top of the document
    pub top: i64,
    /// Height in document units
    pub height: i64,
}

impl SectionExtent {
    pub fn new(id: impl Into<String>, top: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `offset` falls inside this section once the header offset
    /// is taken into account.
    pub fn contains(&self, offset: i64, header_offset: i64) -> bool {
        let start = self.top - header_offset;
        offset >= start && offset < start + self.height
    }
}

/// Navigation handle pointing at a section anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Section id this link activates for
    pub match_id: String,
    /// Text shown in the navbar
    pub label: String,
    /// Whether this link is currently highlighted
    pub active: bool,
}

impl NavLink {
    pub fn new(match_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            match_id: match_id.into(),
            label: label.into(),
            active: false,
        }
    }
}

/// Id of the section containing `offset`.
///
/// When ranges overlap, the last matching section in document order wins.
/// Returns `None` when no section contains the offset.
pub fn active_section(sections: &[SectionExtent], offset: i64, header_offset: i64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.contains(offset, header_offset))
        .last()
        .map(|s| s.id.as_str())
}

/// Re-sync every link so only those matching `active` are highlighted.
///
/// Returns true if any link changed.
pub fn sync_links(links: &mut [NavLink], active: Option<&str>) -> bool {
    let mut changed = false;
    for link in links.iter_mut() {
        let should_be_active = active == Some(link.match_id.as_str());
        if link.active != should_be_active {
            link.active = should_be_active;
            changed = true;
        }
    }
    changed
}
