//! Portfolio content
//!
//! The site is described by a [`Site`] value: hero phrases, stats, about
//! text, skill categories, projects and contact details. A built-in default
//! ships with the binary and can be replaced by a TOML site file.

pub mod wrap;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading site content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read site file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid site file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Stat '{label}' has a non-numeric count: '{count}'")]
    InvalidCount { label: String, count: String },

    #[error("Site has no hero phrases")]
    NoPhrases,
}

/// One entry of the hero stats block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Target the counter animates to; parsed once when the site loads
    pub count: String,
}

/// A single skill inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    /// Proficiency, 0..=100
    #[serde(default)]
    pub level: u8,
    /// Explicit activation delay, overriding the stagger step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<SkillItem>,
}

impl SkillCategory {
    /// Per-item delay overrides in item order.
    pub fn delay_overrides(&self) -> Vec<Option<Duration>> {
        self.items
            .iter()
            .map(|i| i.delay_ms.map(Duration::from_millis))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub intro: String,
    pub email: String,
    pub location: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            intro: "Have a project in mind or just want to say hello? Drop me a message."
                .to_string(),
            email: "hello@rawse.dev".to_string(),
            location: "Remote".to_string(),
        }
    }
}

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Owner name, shown as the navbar brand
    pub name: String,
    /// Line under the typing headline
    pub tagline: String,
    /// Phrases cycled by the typing animation
    pub phrases: Vec<String>,
    pub stats: Vec<Stat>,
    pub about: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

impl Default for Site {
    fn default() -> Self {
        let skill = |name: &str, level: u8| SkillItem {
            name: name.to_string(),
            level,
            delay_ms: None,
        };
        let stat = |label: &str, count: &str| Stat {
            label: label.to_string(),
            count: count.to_string(),
        };

        Self {
            name: "rawse".to_string(),
            tagline: "Full-stack developer crafting web and mobile experiences.".to_string(),
            phrases: [
                "Hi, I'm rawse 👋",
                "I'm a Full-Stack Developer.",
                "Front-End: React ⚛️ | Flutter 💙",
                "Back-End: Laravel 🟢 | Node.js 🔴",
                "Building apps for Web & Mobile.",
                "Creating Digital Excellence",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            stats: vec![
                stat("Projects Completed", "50"),
                stat("Happy Clients", "120"),
                stat("Years Experience", "5"),
            ],
            about: vec![
                "I build products end to end: from the database schema to the last pixel of \
                 the interface. Most days that means React or Flutter on the front and Laravel \
                 or Node.js on the back."
                    .to_string(),
                "I care about fast feedback loops, readable code and interfaces that feel \
                 obvious the first time you use them."
                    .to_string(),
            ],
            skills: vec![
                SkillCategory {
                    title: "Front-End".to_string(),
                    items: vec![
                        skill("React", 90),
                        skill("Flutter", 85),
                        skill("TypeScript", 85),
                        skill("CSS / Tailwind", 80),
                    ],
                },
                SkillCategory {
                    title: "Back-End".to_string(),
                    items: vec![
                        skill("Laravel", 90),
                        skill("Node.js", 85),
                        skill("PostgreSQL", 75),
                        skill("REST & GraphQL", 80),
                    ],
                },
                SkillCategory {
                    title: "Tooling".to_string(),
                    items: vec![skill("Git", 90), skill("Docker", 70), skill("CI/CD", 70)],
                },
            ],
            projects: vec![
                Project {
                    title: "ShopFlow".to_string(),
                    description: "Multi-vendor e-commerce platform with real-time inventory \
                                  and a Flutter companion app."
                        .to_string(),
                    tech: vec!["Laravel".into(), "Flutter".into(), "MySQL".into()],
                    link: None,
                },
                Project {
                    title: "TaskPilot".to_string(),
                    description: "Team task board with drag-and-drop planning and live \
                                  collaboration."
                        .to_string(),
                    tech: vec!["React".into(), "Node.js".into(), "Socket.IO".into()],
                    link: None,
                },
                Project {
                    title: "FitTrack".to_string(),
                    description: "Cross-platform workout tracker with offline sync.".to_string(),
                    tech: vec!["Flutter".into(), "Firebase".into()],
                    link: None,
                },
            ],
            contact: ContactInfo::default(),
        }
    }
}

impl Site {
    /// Load a site from a TOML file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let site = Self::from_toml(&text).map_err(|e| match e {
            ContentError::Parse { source, .. } => ContentError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "loaded site content");
        Ok(site)
    }

    /// Parse and validate site content from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let site: Site = toml::from_str(text).map_err(|source| ContentError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        site.validate()?;
        Ok(site)
    }

    /// Check the invariants the animations rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.phrases.is_empty() {
            return Err(ContentError::NoPhrases);
        }
        self.stat_targets().map(|_| ())
    }

    /// Counter target of every stat, in order.
    pub fn stat_targets(&self) -> Result<Vec<u64>, ContentError> {
        self.stats
            .iter()
            .map(|s| {
                s.count
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ContentError::InvalidCount {
                        label: s.label.clone(),
                        count: s.count.clone(),
                    })
            })
            .collect()
    }
}

/// Anchor id and navbar label of every page section, in document order.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];
