//! View composer: a pure projection of `PortfolioView` into a renderable page
//!
//! The front end renders whatever `compose` returns; no view state lives
//! outside `PortfolioView`.

use serde::Serialize;

use super::entities::{Asset, AssetKind, Project, ProjectId};
use super::filter::{ActiveFilter, FILTER_PRESETS};
use super::site::{PressOutlet, Profile, SiteContent, TickerLogo};
use super::state::PortfolioView;

/// Logos visible at once in the ticker
const TICKER_MAX_VISIBLE: usize = 5;

/// Copies of the logo list laid end to end for a seamless marquee
const TICKER_REPEAT: usize = 3;

const TICKER_EMPTY_MESSAGE: &str = "No images to display";

/// Media block for a card or detail view, one case per asset kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Video { url: String },
    Image { url: String, alt: String },
    Figma { url: String },
    Placeholder,
}

impl Media {
    fn from_asset(asset: &Asset, alt: &str) -> Self {
        match asset.kind {
            AssetKind::Video => Media::Video {
                url: asset.url.clone(),
            },
            AssetKind::Image => Media::Image {
                url: asset.url.clone(),
                alt: alt.to_string(),
            },
            AssetKind::Figma => Media::Figma {
                url: asset.url.clone(),
            },
            AssetKind::Other => Media::Placeholder,
        }
    }
}

/// Grid card for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub client: String,
    pub media: Media,
    /// Columns spanned in the 7-column grid
    pub span: u8,
}

/// Expanded detail view for the selected project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub title: String,
    pub client: String,
    pub media: Media,
    pub overview: String,
    pub contribution: Vec<String>,
    pub deliverables: Vec<String>,
    pub impact: Vec<String>,
    pub tags: Vec<String>,
}

impl From<&Project> for ProjectDetail {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            client: project.client.clone(),
            media: project
                .primary_asset()
                .map(|asset| Media::from_asset(asset, &project.title))
                .unwrap_or(Media::Placeholder),
            overview: project.overview.clone(),
            contribution: project.contribution.clone(),
            deliverables: project.deliverables.clone(),
            impact: project.impact.clone(),
            tags: project.tags.clone(),
        }
    }
}

/// Header filter button with its active flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub label: &'static str,
    pub tag: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub profile: Profile,
    pub press: Vec<PressOutlet>,
    pub contact_heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerView {
    pub logos: Vec<TickerLogo>,
    pub slides_to_show: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// Main content area: the detail view replaces the grid while open
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MainContent {
    Detail(ProjectDetail),
    Grid { cards: Vec<ProjectCard> },
}

/// The whole page, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub sidebar: Sidebar,
    pub header: Vec<FilterButton>,
    pub active_filter: ActiveFilter,
    pub main: MainContent,
    pub ticker: TickerView,
}

/// Columns spanned by the card at `position` in the filtered sequence
fn card_span(position: usize) -> u8 {
    match position % 6 {
        2 | 3 => 3,
        _ => 2,
    }
}

/// Cards for a filtered sequence. Projects without assets get no card.
pub fn cards(projects: &[&Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .filter_map(|(position, project)| {
            let asset = project.primary_asset()?;
            Some(ProjectCard {
                id: project.id,
                title: project.title.clone(),
                client: project.client.clone(),
                media: Media::from_asset(asset, &project.title),
                span: card_span(position),
            })
        })
        .collect()
}

/// Header buttons flagged against the active filter
pub fn header(active: &ActiveFilter) -> Vec<FilterButton> {
    FILTER_PRESETS
        .iter()
        .map(|preset| FilterButton {
            label: preset.label,
            tag: preset.tag,
            active: preset.tag == active.as_str(),
        })
        .collect()
}

fn ticker(logos: &[TickerLogo]) -> TickerView {
    if logos.is_empty() {
        return TickerView {
            logos: Vec::new(),
            slides_to_show: 0,
            placeholder: Some(TICKER_EMPTY_MESSAGE),
        };
    }

    TickerView {
        logos: logos
            .iter()
            .cycle()
            .take(logos.len() * TICKER_REPEAT)
            .cloned()
            .collect(),
        slides_to_show: logos.len().min(TICKER_MAX_VISIBLE),
        placeholder: None,
    }
}

/// Project the session state into a page
pub fn compose(view: &PortfolioView, site: &SiteContent) -> PageView {
    let main = match view.selected() {
        Some(project) => MainContent::Detail(project.into()),
        None => MainContent::Grid {
            cards: cards(&view.filtered()),
        },
    };

    PageView {
        sidebar: Sidebar {
            profile: site.profile.clone(),
            press: site.press.clone(),
            contact_heading: site.contact_heading.clone(),
        },
        header: header(view.active_filter()),
        active_filter: view.active_filter().clone(),
        main,
        ticker: ticker(&site.ticker),
    }
}
