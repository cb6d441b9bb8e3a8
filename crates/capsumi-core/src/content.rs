//! Static page content: assignment and milestone cards

use crate::config::AssetsConfig;

/// Number of authors listed on every assignment
const AUTHORS_PER_ASSIGNMENT: usize = 4;

const PROGRESS_MILESTONES: usize = 3;
const UI_MILESTONES: usize = 4;

const ASSIGNMENT_HINT: &str = "Click to view details and authors";
const MILESTONE_HINT: &str = "View progress details";

const MILESTONE_TAIL: &str = "Here you would find detailed information about the achievements, \
     challenges, and next steps for this phase of the Capsumi project.";

/// A person credited on a card, linked to their document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub document_url: String,
}

/// Expanded content shown in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCard {
    pub title: String,
    pub description: String,
    /// `None` hides the authors block entirely
    pub authors: Option<Vec<Author>>,
}

impl ContentCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            authors: None,
        }
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = Some(authors);
        self
    }

    /// Authors in display order; empty when the card has none
    pub fn authors(&self) -> &[Author] {
        self.authors.as_deref().unwrap_or_default()
    }
}

/// Clickable summary in one of the grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: String,
    pub hint: &'static str,
    pub card: ContentCard,
}

/// All tiles rendered on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub assignments: Vec<Tile>,
    pub progress: Vec<Tile>,
    pub ui_progress: Vec<Tile>,
}

impl Catalog {
    pub fn new(assets: &AssetsConfig) -> Self {
        Self {
            assignments: assignments(assets),
            progress: progress_milestones(),
            ui_progress: ui_milestones(),
        }
    }
}

fn placeholder_authors(assets: &AssetsConfig) -> Vec<Author> {
    (1..=AUTHORS_PER_ASSIGNMENT)
        .map(|n| Author {
            name: "Name Surname".to_string(),
            document_url: assets.author_document(n),
        })
        .collect()
}

fn assignments(assets: &AssetsConfig) -> Vec<Tile> {
    let descriptions = [
        "It covers the fundamental concepts and initial research phase of the Capsumi project.",
        "It focuses on the implementation details and technical specifications of the project.",
    ];

    descriptions
        .iter()
        .enumerate()
        .map(|(i, detail)| {
            let title = format!("Assignment {}", i + 1);
            let description = format!("This is a placeholder description for {title}. {detail}");
            Tile {
                label: title.clone(),
                hint: ASSIGNMENT_HINT,
                card: ContentCard::new(title, description)
                    .with_authors(placeholder_authors(assets)),
            }
        })
        .collect()
}

fn progress_milestones() -> Vec<Tile> {
    (1..=PROGRESS_MILESTONES)
        .map(|n| Tile {
            label: format!("Milestone {n}"),
            hint: MILESTONE_HINT,
            card: ContentCard::new(
                format!("Progress Milestone {n}"),
                format!("This is a placeholder for project progress milestone {n}. {MILESTONE_TAIL}"),
            ),
        })
        .collect()
}

fn ui_milestones() -> Vec<Tile> {
    (1..=UI_MILESTONES)
        .map(|n| Tile {
            label: format!("Milestone {n}"),
            hint: MILESTONE_HINT,
            card: ContentCard::new(
                format!("UI Development {n}"),
                format!("This is a placeholder for UI development milestone {n}. {MILESTONE_TAIL}"),
            ),
        })
        .collect()
}
