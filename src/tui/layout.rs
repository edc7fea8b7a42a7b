//! Document layout for the terminal page
//!
//! Stacks the page blocks vertically for a given terminal width and
//! records where each one starts. Everything downstream (scroll effects,
//! hit testing, rendering) works in these document rows.

use crate::contact::Field;
use crate::content::wrap::wrap_words;
use crate::content::Site;
use crate::reactor::{ElementBounds, ElementId, RevealKind, SectionExtent};
use crate::session::PageMap;

/// Rows covered by the fixed navbar at the top of the screen.
pub const NAVBAR_HEIGHT: i64 = 3;
/// Decoration orbs floating in the hero.
pub const ORB_COUNT: usize = 3;
/// Terminals narrower than this get the collapsed mobile menu.
pub const MOBILE_BREAKPOINT: u16 = 72;

const MAX_CONTENT_WIDTH: usize = 96;
const STATS_HEIGHT: i64 = 4;
const HEADING_HEIGHT: i64 = 3;
const FIELD_HEIGHT: i64 = 3;
const BUTTON_HEIGHT: i64 = 3;
const FOOTER_HEIGHT: i64 = 2;

/// What a block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    Stats,
    Heading,
    About(usize),
    SkillCategory(usize),
    Project(usize),
    ContactInfo,
    ContactForm,
    Footer,
}

/// One vertical slice of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Section the block belongs to (`None` for the footer)
    pub section: Option<&'static str>,
    pub top: i64,
    pub height: i64,
    /// Set for blocks that reveal on first intersection
    pub element: Option<ElementId>,
}

impl Block {
    pub fn contains(&self, row: i64) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Clickable part of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Field(Field),
    Submit,
}

/// The laid-out page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: i64,
    /// Usable text width
    pub content_width: usize,
    /// Left margin centering the content column
    pub margin: usize,
    pub blocks: Vec<Block>,
    pub height: i64,
}

impl PageLayout {
    /// Lay out `site` for a terminal `width` columns wide whose page
    /// viewport is `viewport_height` rows.
    pub fn build(site: &Site, width: u16, viewport_height: i64) -> Self {
        let content_width = (width as usize).min(MAX_CONTENT_WIDTH).saturating_sub(4).max(10);
        let margin = (width as usize).saturating_sub(content_width) / 2;

        let mut stack = Stack::default();

        let tagline = wrap_words(&site.tagline, content_width).len() as i64;
        let hero = (NAVBAR_HEIGHT + 6 + tagline).max(viewport_height - STATS_HEIGHT - 1);
        stack.push(BlockKind::Hero, Some("home"), hero, false);
        stack.push(BlockKind::Stats, Some("home"), STATS_HEIGHT + 1, true);

        stack.push(BlockKind::Heading, Some("about"), HEADING_HEIGHT, true);
        for (i, paragraph) in site.about.iter().enumerate() {
            let lines = wrap_words(paragraph, content_width).len() as i64;
            stack.push(BlockKind::About(i), Some("about"), lines + 1, true);
        }

        stack.push(BlockKind::Heading, Some("skills"), HEADING_HEIGHT, true);
        for (i, category) in site.skills.iter().enumerate() {
            let rows = category.items.len() as i64 + 2;
            stack.push(BlockKind::SkillCategory(i), Some("skills"), rows, true);
        }

        stack.push(BlockKind::Heading, Some("projects"), HEADING_HEIGHT, true);
        let inner = content_width.saturating_sub(4);
        for (i, project) in site.projects.iter().enumerate() {
            let description = wrap_words(&project.description, inner).len() as i64;
            // border, title, description, tech, border, gap
            stack.push(BlockKind::Project(i), Some("projects"), description + 5, true);
        }

        stack.push(BlockKind::Heading, Some("contact"), HEADING_HEIGHT, true);
        let intro = wrap_words(&site.contact.intro, content_width).len() as i64;
        stack.push(BlockKind::ContactInfo, Some("contact"), intro + 3, true);
        let form = FIELD_HEIGHT * Field::ALL.len() as i64 + BUTTON_HEIGHT + 2;
        stack.push(BlockKind::ContactForm, Some("contact"), form, true);

        stack.push(BlockKind::Footer, None, FOOTER_HEIGHT, false);

        Self {
            width,
            viewport_height,
            content_width,
            margin,
            height: stack.top,
            blocks: stack.blocks,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> i64 {
        (self.height - self.viewport_height).max(0)
    }

    /// Block covering document `row`.
    pub fn block_at(&self, row: i64) -> Option<&Block> {
        self.blocks.iter().find(|b| b.contains(row))
    }

    pub fn block(&self, kind: BlockKind) -> Option<&Block> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    /// Project card under document `row`.
    pub fn project_at(&self, row: i64) -> Option<usize> {
        match self.block_at(row)? {
            // the last row of a card is the gap below it
            Block {
                kind: BlockKind::Project(i),
                top,
                height,
                ..
            } if row < top + height - 1 => Some(*i),
            _ => None,
        }
    }

    /// Form control under document `row`.
    pub fn form_target_at(&self, row: i64) -> Option<FormTarget> {
        let block = self.block(BlockKind::ContactForm)?;
        if !block.contains(row) {
            return None;
        }
        let rel = row - block.top;
        let fields = FIELD_HEIGHT * Field::ALL.len() as i64;
        if rel < fields {
            Field::ALL
                .get((rel / FIELD_HEIGHT) as usize)
                .map(|f| FormTarget::Field(*f))
        } else if rel < fields + BUTTON_HEIGHT {
            Some(FormTarget::Submit)
        } else {
            None
        }
    }

    /// Scroll geometry and reveal targets for the session.
    pub fn page_map(&self, site: &Site) -> PageMap {
        let mut sections: Vec<SectionExtent> = Vec::new();
        for block in &self.blocks {
            let Some(id) = block.section else { continue };
            match sections.last_mut() {
                Some(last) if last.id == id => last.height = block.top + block.height - last.top,
                _ => sections.push(SectionExtent::new(id, block.top, block.height)),
            }
        }

        let elements = self
            .blocks
            .iter()
            .filter_map(|block| {
                let id = block.element?;
                let kind = match block.kind {
                    BlockKind::Stats => RevealKind::Stats {
                        targets: site.stat_targets().unwrap_or_default(),
                    },
                    BlockKind::SkillCategory(i) => RevealKind::SkillCategory {
                        item_delays: site
                            .skills
                            .get(i)
                            .map(|c| c.delay_overrides())
                            .unwrap_or_default(),
                    },
                    _ => RevealKind::Plain,
                };
                Some((id, ElementBounds::new(block.top, block.height), kind))
            })
            .collect();

        PageMap {
            sections,
            elements,
            orbs: ORB_COUNT,
            height: self.height,
        }
    }
}

#[derive(Default)]
struct Stack {
    blocks: Vec<Block>,
    top: i64,
    next_element: usize,
}

impl Stack {
    fn push(&mut self, kind: BlockKind, section: Option<&'static str>, height: i64, reveals: bool) {
        let element = reveals.then(|| {
            let id = ElementId(self.next_element);
            self.next_element += 1;
            id
        });
        self.blocks.push(Block {
            kind,
            section,
            top: self.top,
            height,
            element,
        });
        self.top += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;

    fn layout() -> PageLayout {
        PageLayout::build(&Site::default(), 100, 30)
    }

    #[test]
    fn blocks_are_contiguous() {
        let l = layout();
        let mut row = 0;
        for block in &l.blocks {
            assert_eq!(block.top, row);
            assert!(block.height > 0);
            row += block.height;
        }
        assert_eq!(row, l.height);
    }

    #[test]
    fn sections_follow_navbar_order() {
        let l = layout();
        let map = l.page_map(&Site::default());
        let ids: Vec<_> = map.sections.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<_> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, expected);

        for pair in map.sections.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
    }

    #[test]
    fn stats_and_skills_get_follow_up_kinds() {
        let site = Site::default();
        let map = layout().page_map(&site);
        let stats = map
            .elements
            .iter()
            .filter(|(_, _, k)| matches!(k, RevealKind::Stats { .. }))
            .count();
        let skills = map
            .elements
            .iter()
            .filter(|(_, _, k)| matches!(k, RevealKind::SkillCategory { .. }))
            .count();
        assert_eq!(stats, 1);
        assert_eq!(skills, site.skills.len());
        assert_eq!(map.orbs, ORB_COUNT);
    }

    #[test]
    fn element_ids_are_unique() {
        let map = layout().page_map(&Site::default());
        let mut ids: Vec<_> = map.elements.iter().map(|(id, _, _)| *id).collect();
        let total = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn hero_fills_first_screen() {
        let tall = PageLayout::build(&Site::default(), 100, 60);
        let hero = tall.block(BlockKind::Hero).unwrap();
        assert_eq!(hero.height, 60 - STATS_HEIGHT - 1);
    }

    #[test]
    fn narrow_wraps_to_more_rows() {
        let site = Site::default();
        let wide = PageLayout::build(&site, 120, 30);
        let narrow = PageLayout::build(&site, 40, 30);
        assert!(narrow.height > wide.height);
        assert!(narrow.is_mobile());
        assert!(!wide.is_mobile());
    }

    #[test]
    fn form_targets_map_rows() {
        let l = layout();
        let form = l.block(BlockKind::ContactForm).unwrap().top;
        assert_eq!(l.form_target_at(form), Some(FormTarget::Field(Field::Name)));
        assert_eq!(
            l.form_target_at(form + 4),
            Some(FormTarget::Field(Field::Email))
        );
        assert_eq!(l.form_target_at(form + 12), Some(FormTarget::Submit));
        assert_eq!(l.form_target_at(form + 15), None);
        assert_eq!(l.form_target_at(0), None);
    }

    #[test]
    fn project_hit_excludes_gap_row() {
        let l = layout();
        let card = l.block(BlockKind::Project(0)).unwrap().clone();
        assert_eq!(l.project_at(card.top), Some(0));
        assert_eq!(l.project_at(card.top + card.height - 1), None);
    }

    #[test]
    fn max_scroll_is_bounded() {
        let l = layout();
        assert_eq!(l.max_scroll(), l.height - 30);

        // hero and stats fill the first screen, so only what follows scrolls
        let tall = PageLayout::build(&Site::default(), 100, 10_000);
        let stats = tall.block(BlockKind::Stats).unwrap();
        assert_eq!(stats.top + stats.height, 10_000);
        assert_eq!(tall.max_scroll(), tall.height - (stats.top + stats.height));

        let shorter = PageLayout {
            height: 20,
            ..l.clone()
        };
        assert_eq!(shorter.max_scroll(), 0);
    }
}
