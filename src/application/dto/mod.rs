// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are render-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryFilter, Project, ProjectLink};

const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
const YOUTUBE_THUMB_BASE: &str = "https://img.youtube.com/vi/";

// ============================================================================
// PROJECT CARD DTOs
// ============================================================================

/// Everything the rendering layer needs to draw one project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCardDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub is_private: bool,
    pub pitch: String,
    pub summary: String,
    pub metrics: Vec<String>,
    pub technical_highlights: Vec<String>,
    pub links: Vec<LinkDto>,
    /// Target of the "more details" call-to-action, from the link labelled "GitHub"
    pub details_link: Option<String>,
    pub media: MediaSlotDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDto {
    pub label: String,
    pub href: String,
}

/// The card's media slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaSlotDto {
    /// No video: an empty slot keeps the card layout
    Placeholder,
    /// The project's primary (first) video
    Video {
        video_id: String,
        watch_url: String,
        thumbnail_url: String,
        alt_text: String,
    },
}

/// Card sections, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSection {
    Media,
    Header,
    Pitch,
    Summary,
    Metrics,
    TechnicalHighlights,
    Links,
    DetailsCallToAction,
}

impl ProjectCardDto {
    /// Sections this card emits, in fixed order.
    /// Metrics only when present; highlights always; call-to-action only with a GitHub link.
    pub fn sections(&self) -> Vec<CardSection> {
        let mut sections = vec![
            CardSection::Media,
            CardSection::Header,
            CardSection::Pitch,
            CardSection::Summary,
        ];
        if !self.metrics.is_empty() {
            sections.push(CardSection::Metrics);
        }
        sections.push(CardSection::TechnicalHighlights);
        sections.push(CardSection::Links);
        if self.details_link.is_some() {
            sections.push(CardSection::DetailsCallToAction);
        }
        sections
    }
}

impl From<&Project> for ProjectCardDto {
    fn from(project: &Project) -> Self {
        let media = match project.primary_video() {
            Some(video_id) => MediaSlotDto::video(video_id, &project.title),
            None => MediaSlotDto::Placeholder,
        };

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.to_string(),
            is_private: project.is_private,
            pitch: project.pitch.clone(),
            summary: project.summary.clone(),
            metrics: project.metrics.clone(),
            technical_highlights: project.technical_highlights.clone(),
            links: project.links.iter().map(LinkDto::from).collect(),
            details_link: project.github_link().map(|l| l.href.clone()),
            media,
        }
    }
}

impl From<&ProjectLink> for LinkDto {
    fn from(link: &ProjectLink) -> Self {
        Self {
            label: link.label.clone(),
            href: link.href.clone(),
        }
    }
}

impl MediaSlotDto {
    pub fn video(video_id: &str, title: &str) -> Self {
        MediaSlotDto::Video {
            video_id: video_id.to_string(),
            watch_url: format!("{}{}", YOUTUBE_WATCH_BASE, video_id),
            thumbnail_url: format!("{}{}/maxresdefault.jpg", YOUTUBE_THUMB_BASE, video_id),
            alt_text: format!("Video thumbnail: {}", title),
        }
    }
}

// ============================================================================
// VIEW FRAME DTOs
// ============================================================================

/// One selectable filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionDto {
    pub label: String,
    pub page: String,
    pub active: bool,
}

/// What the view exposes to the rendering layer per frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFrameDto {
    pub selected: String,
    pub categories: Vec<FilterOptionDto>,
    pub projects: Vec<ProjectCardDto>,
}

impl FilterOptionDto {
    pub fn new(option: CategoryFilter, selected: CategoryFilter) -> Self {
        Self {
            label: option.label().to_string(),
            page: option.page_name(),
            active: option == selected,
        }
    }
}
