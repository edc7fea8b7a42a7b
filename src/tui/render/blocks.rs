//! Lines for each document block.
//!
//! Every function returns unindented lines; the caller adds the margin and
//! fits the result to the block height.

use chrono::Datelike;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::contact::ContactFlow;
use crate::content::wrap::wrap_words;
use crate::content::Site;
use crate::reactor::{CounterAnimation, ElementId, Parallax};
use crate::theme::Theme;
use crate::tui::layout::{Block, BlockKind, NAVBAR_HEIGHT};

use super::form::form_lines;
use super::text::{blank, box_bottom, box_row, box_top, center, pad, width};

const ORB: &str = "●";
const BAR_WIDTH: usize = 20;

/// Data shared by every block renderer.
pub struct BlockContext<'a> {
    pub site: &'a Site,
    pub theme: &'a Theme,
    /// Content column width
    pub width: usize,
    pub headline: &'a str,
    pub parallax: &'a Parallax,
    pub counters: &'a [CounterAnimation],
    pub skill_active: &'a dyn Fn(ElementId, usize) -> bool,
    pub hovered_project: Option<usize>,
    pub contact: &'a ContactFlow,
    pub editing: bool,
}

/// Heading shown at the top of a section.
pub fn section_title(id: &str) -> &'static str {
    match id {
        "about" => "About Me",
        "skills" => "Skills & Expertise",
        "projects" => "Featured Projects",
        "contact" => "Get In Touch",
        _ => "",
    }
}

pub fn block_lines(block: &Block, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    match block.kind {
        BlockKind::Hero => hero_lines(block.height, cx),
        BlockKind::Stats => stats_lines(cx),
        BlockKind::Heading => heading_lines(block.section.map(section_title).unwrap_or(""), cx),
        BlockKind::About(i) => about_lines(i, cx),
        BlockKind::SkillCategory(i) => skill_lines(i, block.element, cx),
        BlockKind::Project(i) => project_lines(i, cx),
        BlockKind::ContactInfo => contact_info_lines(cx),
        BlockKind::ContactForm => form_lines(cx.contact, cx.editing, cx.width, cx.theme),
        BlockKind::Footer => footer_lines(cx),
    }
}

fn hero_lines(height: i64, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = cx.theme;
    let mut content = vec![
        Line::from(vec![
            Span::styled(cx.headline.to_string(), theme.accent_bold_style()),
            Span::styled("▌".to_string(), theme.accent_style()),
        ]),
        blank(),
    ];
    for line in wrap_words(&cx.site.tagline, cx.width) {
        content.push(Line::styled(line, theme.text_secondary_style()));
    }
    content.push(blank());
    content.push(Line::styled(
        "scroll ↓  ·  1-5 jump  ·  t theme  ·  ? help".to_string(),
        theme.text_secondary_style(),
    ));

    let rows = height.max(0) as usize;
    let mut lines: Vec<Option<Line<'static>>> = vec![None; rows];

    // Content drifts with the hero parallax offset.
    let free = height - NAVBAR_HEIGHT - content.len() as i64;
    let start = NAVBAR_HEIGHT + free.max(0) / 2 + cx.parallax.hero;
    for (i, line) in content.into_iter().enumerate() {
        let row = start + i as i64;
        if (0..height).contains(&row) {
            lines[row as usize] = Some(line);
        }
    }

    // Orbs only land on rows the text left empty.
    let bases = [NAVBAR_HEIGHT + 1, height / 2, height - 2];
    let columns = [cx.width / 10, cx.width * 4 / 5, cx.width / 2];
    for (i, offset) in cx.parallax.orbs.iter().enumerate() {
        let (Some(base), Some(col)) = (bases.get(i), columns.get(i)) else {
            continue;
        };
        let row = base + offset;
        if (0..height).contains(&row)
            && lines[row as usize].as_ref().map_or(true, |l| l.width() == 0)
        {
            lines[row as usize] = Some(Line::from(vec![
                Span::raw(" ".repeat(*col)),
                Span::styled(ORB.to_string(), theme.accent_style().add_modifier(Modifier::DIM)),
            ]));
        }
    }

    lines.into_iter().map(Option::unwrap_or_default).collect()
}

fn stats_lines(cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = cx.theme;
    let count = cx.site.stats.len().max(1);
    let cell = (cx.width.saturating_sub(2 * (count - 1)) / count).saturating_sub(2).max(4);

    let mut rows: [Vec<Span<'static>>; 4] = Default::default();
    for (i, stat) in cx.site.stats.iter().enumerate() {
        if i > 0 {
            for row in rows.iter_mut() {
                row.push(Span::raw("  ".to_string()));
            }
        }
        let value = cx
            .counters
            .get(i)
            .map(CounterAnimation::display)
            .unwrap_or_else(|| "0".to_string());
        let border = theme.text_secondary_style();
        rows[0].extend(box_top(cell, None, border).spans);
        rows[1].push(Span::styled("│".to_string(), border));
        rows[1].push(Span::styled(center(&value, cell), theme.accent_bold_style()));
        rows[1].push(Span::styled("│".to_string(), border));
        rows[2].push(Span::styled("│".to_string(), border));
        rows[2].push(Span::styled(center(&stat.label, cell), theme.text_secondary_style()));
        rows[2].push(Span::styled("│".to_string(), border));
        rows[3].extend(box_bottom(cell, border).spans);
    }
    rows.into_iter().map(Line::from).collect()
}

fn heading_lines(title: &str, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    vec![
        blank(),
        Line::styled(title.to_string(), cx.theme.accent_bold_style()),
        Line::styled("─".repeat(width(title)), cx.theme.accent_style()),
    ]
}

fn about_lines(index: usize, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let Some(paragraph) = cx.site.about.get(index) else {
        return Vec::new();
    };
    wrap_words(paragraph, cx.width)
        .into_iter()
        .map(|l| Line::styled(l, cx.theme.text_style()))
        .collect()
}

fn skill_lines(index: usize, element: Option<ElementId>, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = cx.theme;
    let Some(category) = cx.site.skills.get(index) else {
        return Vec::new();
    };
    let name_width = category
        .items
        .iter()
        .map(|i| width(&i.name))
        .max()
        .unwrap_or(0)
        .min(cx.width / 2);

    let mut lines = vec![Line::styled(
        category.title.clone(),
        theme.text_style().add_modifier(Modifier::BOLD),
    )];
    for (i, item) in category.items.iter().enumerate() {
        let active = element.is_some_and(|id| (cx.skill_active)(id, i));
        let filled = if active {
            (usize::from(item.level.min(100)) * BAR_WIDTH).div_ceil(100)
        } else {
            0
        };
        let mut spans = vec![
            Span::styled(
                format!("  {} ", pad(&item.name, name_width)),
                theme.text_style(),
            ),
            Span::styled("█".repeat(filled), theme.accent_style()),
            Span::styled("░".repeat(BAR_WIDTH - filled), theme.text_secondary_style()),
        ];
        if active {
            spans.push(Span::styled(
                format!(" {}%", item.level.min(100)),
                theme.text_secondary_style(),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn project_lines(index: usize, cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = cx.theme;
    let Some(project) = cx.site.projects.get(index) else {
        return Vec::new();
    };
    let hovered = cx.hovered_project == Some(index);
    let border = if hovered {
        theme.accent_bold_style()
    } else {
        theme.text_secondary_style()
    };
    let inner = cx.width.saturating_sub(2);

    let mut title = vec![Span::styled(
        project.title.clone(),
        theme.text_style().add_modifier(Modifier::BOLD),
    )];
    if hovered {
        title.push(Span::styled(" ↗".to_string(), theme.accent_style()));
    }

    let mut lines = vec![box_top(inner, None, border), box_row(title, inner, border)];
    for line in wrap_words(&project.description, inner.saturating_sub(2)) {
        lines.push(box_row(
            vec![Span::styled(line, theme.text_secondary_style())],
            inner,
            border,
        ));
    }
    let mut tech: Vec<Span<'static>> = project
        .tech
        .iter()
        .map(|t| Span::styled(format!("#{} ", t), theme.accent_style()))
        .collect();
    if let Some(link) = &project.link {
        tech.push(Span::styled(link.clone(), theme.text_secondary_style()));
    }
    lines.push(box_row(tech, inner, border));
    lines.push(box_bottom(inner, border));
    lines
}

fn contact_info_lines(cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = cx.theme;
    let info = &cx.site.contact;
    let mut lines: Vec<Line<'static>> = wrap_words(&info.intro, cx.width)
        .into_iter()
        .map(|l| Line::styled(l, theme.text_style()))
        .collect();
    lines.push(blank());
    lines.push(Line::from(vec![
        Span::styled("✉ ".to_string(), theme.accent_style()),
        Span::styled(info.email.clone(), theme.text_style()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("⌂ ".to_string(), theme.accent_style()),
        Span::styled(info.location.clone(), theme.text_style()),
    ]));
    lines
}

fn footer_lines(cx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let year = chrono::Local::now().year();
    vec![
        blank(),
        Line::styled(
            center(&format!("© {} {}. Built with Rust.", year, cx.site.name), cx.width),
            cx.theme.text_secondary_style(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn with_cx<R>(f: impl FnOnce(&BlockContext<'_>) -> R) -> R {
        let site = Site::default();
        let theme = Theme::light();
        let parallax = Parallax::new(3);
        let counters = vec![
            CounterAnimation::new(50, 50),
            CounterAnimation::new(120, 50),
            CounterAnimation::new(5, 50),
        ];
        let contact = ContactFlow::new();
        let active = |_: ElementId, i: usize| i == 0;
        let cx = BlockContext {
            site: &site,
            theme: &theme,
            width: 60,
            headline: "Hi, I'm",
            parallax: &parallax,
            counters: &counters,
            skill_active: &active,
            hovered_project: Some(1),
            contact: &contact,
            editing: false,
        };
        f(&cx)
    }

    #[test]
    fn hero_shows_headline_with_cursor() {
        let lines = with_cx(|cx| hero_lines(20, cx));
        assert_eq!(lines.len(), 20);
        assert!(text(&lines).iter().any(|l| l == "Hi, I'm▌"));
    }

    #[test]
    fn hero_draws_orbs_on_free_rows() {
        let lines = with_cx(|cx| hero_lines(20, cx));
        let orbs = text(&lines).iter().filter(|l| l.contains(ORB)).count();
        assert_eq!(orbs, 3);
    }

    #[test]
    fn stats_show_counter_values() {
        let lines = with_cx(stats_lines);
        assert_eq!(lines.len(), 4);
        let values = &text(&lines)[1];
        assert!(values.contains(" 0+ "));
        assert!(text(&lines)[2].contains("Happy Clients"));
    }

    #[test]
    fn skill_bars_fill_only_when_active() {
        let lines = with_cx(|cx| skill_lines(0, Some(ElementId(9)), cx));
        let rows = text(&lines);
        assert_eq!(rows[0], "Front-End");
        assert!(rows[1].contains('█') && rows[1].ends_with("90%"));
        assert!(!rows[2].contains('█'));
    }

    #[test]
    fn hovered_project_is_marked() {
        let hovered = with_cx(|cx| project_lines(1, cx));
        let plain = with_cx(|cx| project_lines(0, cx));
        assert!(text(&hovered)[1].contains('↗'));
        assert!(!text(&plain)[1].contains('↗'));
    }

    #[test]
    fn project_lines_fill_layout_height() {
        // layout reserves description + 5 rows, the last being the gap
        let lines = with_cx(|cx| {
            let inner = cx.width - 2;
            let desc = wrap_words(&cx.site.projects[0].description, inner - 2).len();
            (project_lines(0, cx).len(), desc)
        });
        assert_eq!(lines.0, lines.1 + 4);
    }

    #[test]
    fn section_titles() {
        assert_eq!(section_title("contact"), "Get In Touch");
        assert_eq!(section_title("home"), "");
    }
}
