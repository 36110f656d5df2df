// src/infrastructure/html_renderer.rs
//
// Static HTML rendering of a view frame.
//
// RULES:
// - Pure: frame + profile in, document out
// - Card sections are emitted exactly in `ProjectCardDto::sections()` order
// - Every outbound link opens a new browsing context with the referrer stripped
// - All text is escaped

use chrono::{Datelike, Utc};

use crate::application::dto::{
    CardSection, FilterOptionDto, MediaSlotDto, ProjectCardDto, ViewFrameDto,
};
use crate::domain::Profile;

const OUTBOUND: &str = r#"target="_blank" rel="noreferrer""#;

const STYLESHEET: &str = "\
body{margin:0;background:#09090b;color:#f4f4f5;font-family:system-ui,sans-serif;line-height:1.5}\
.page{max-width:48rem;margin:0 auto;padding:2.5rem 1.25rem}\
.kicker{color:#a1a1aa;font-size:.875rem}\
.pill{display:inline-block;border:1px solid #27272a;border-radius:999px;padding:.15rem .75rem;font-size:.75rem;margin:.15rem}\
.pill.active{border-color:#a1a1aa;background:#27272a}\
nav a,.filters a{color:#d4d4d8;margin-right:1rem}\
section{padding:2.5rem 0}\
.card{display:flex;gap:1rem;border:1px solid #27272a;border-radius:1rem;padding:1rem;margin-bottom:1rem}\
.media{flex:0 0 42%}\
.media img{width:100%;border-radius:.75rem}\
.media-placeholder{aspect-ratio:16/9;border:1px solid #27272a;border-radius:.75rem}\
.link-btn{display:inline-block;border:1px solid #27272a;border-radius:999px;padding:.15rem .75rem;margin:.15rem;color:#e4e4e7}\
.details-cta{display:inline-block;margin-top:1.25rem;padding:.75rem 1.5rem;border:1px solid #a855f7;border-radius:.75rem;color:#f4f4f5}\
footer{border-top:1px solid #18181b;padding-top:1.5rem;color:#71717a;font-size:.75rem}";

/// Renders complete pages
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    page_title: String,
    year: i32,
}

impl HtmlRenderer {
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            year: Utc::now().year(),
        }
    }

    /// Pin the footer year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn render_page(&self, profile: &Profile, frame: &ViewFrameDto) -> String {
        let mut html = String::with_capacity(16 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "<title>{} · {}</title>\n",
            escape(&profile.name),
            escape(&self.page_title)
        ));
        html.push_str(&format!("<style>{}</style>\n", STYLESHEET));
        html.push_str("</head>\n<body>\n<div class=\"page\">\n");

        self.render_hero(&mut html, profile);

        html.push_str("<main>\n");
        render_list_section(&mut html, "about", "What I own best", &profile.strengths);
        render_projects(&mut html, frame);
        render_list_section(&mut html, "stack", "Tooling & stack", &profile.stack);
        render_list_section(&mut html, "availability", "Availability", &profile.availability);
        render_profile_links(&mut html, profile);
        html.push_str("</main>\n");

        html.push_str(&format!(
            "<footer>© {} {}</footer>\n",
            self.year,
            escape(&profile.name)
        ));
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    fn render_hero(&self, html: &mut String, profile: &Profile) {
        html.push_str("<header class=\"hero\">\n");
        html.push_str(&format!(
            "<p class=\"kicker\">{}</p>\n",
            escape(&self.page_title)
        ));
        html.push_str(&format!("<h1>{}</h1>\n", escape(&profile.name)));
        html.push_str(&format!(
            "<p class=\"headline\">{}</p>\n",
            escape(&profile.headline)
        ));
        if !profile.summary.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", escape(&profile.summary)));
        }
        if !profile.metrics.is_empty() {
            html.push_str("<div class=\"badges\">");
            for metric in &profile.metrics {
                html.push_str(&pill(metric));
            }
            html.push_str("</div>\n");
        }
        html.push_str(
            "<nav><a href=\"#projects\">Projects</a><a href=\"#stack\">Tooling</a>\
             <a href=\"#availability\">Availability</a><a href=\"#links\">Links</a></nav>\n",
        );
        html.push_str("</header>\n");
    }
}

fn render_projects(html: &mut String, frame: &ViewFrameDto) {
    html.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");

    html.push_str("<nav class=\"filters\">");
    for option in &frame.categories {
        html.push_str(&filter_pill(option));
    }
    html.push_str("</nav>\n");

    html.push_str("<div class=\"cards\">\n");
    for card in &frame.projects {
        render_card(html, card);
    }
    html.push_str("</div>\n</section>\n");
}

fn filter_pill(option: &FilterOptionDto) -> String {
    if option.active {
        format!(
            "<a class=\"pill active\" href=\"{}#projects\" aria-current=\"page\">{}</a>",
            escape(&option.page),
            escape(&option.label)
        )
    } else {
        format!(
            "<a class=\"pill\" href=\"{}#projects\">{}</a>",
            escape(&option.page),
            escape(&option.label)
        )
    }
}

/// One card, section by section
pub fn render_card(html: &mut String, card: &ProjectCardDto) {
    html.push_str(&format!(
        "<article class=\"card\" id=\"project-{}\" data-category=\"{}\">\n",
        escape(&card.id),
        escape(&card.category)
    ));

    let mut body_open = false;
    for section in card.sections() {
        if section != CardSection::Media && !body_open {
            html.push_str("<div class=\"body\">\n");
            body_open = true;
        }
        match section {
            CardSection::Media => render_media(html, card),
            CardSection::Header => {
                html.push_str("<div class=\"card-header\">");
                html.push_str(&format!("<h3>{}</h3>", escape(&card.title)));
                html.push_str(&pill(&card.category));
                if card.is_private {
                    html.push_str("<span class=\"pill private\">Private</span>");
                }
                html.push_str("</div>\n");
            }
            CardSection::Pitch => {
                html.push_str(&format!("<p class=\"pitch\">{}</p>\n", escape(&card.pitch)));
            }
            CardSection::Summary => {
                html.push_str(&format!(
                    "<p class=\"summary\">{}</p>\n",
                    escape(&card.summary)
                ));
            }
            CardSection::Metrics => {
                html.push_str("<div class=\"metrics\">");
                for metric in &card.metrics {
                    html.push_str(&pill(metric));
                }
                html.push_str("</div>\n");
            }
            CardSection::TechnicalHighlights => {
                html.push_str("<ul class=\"highlights\">");
                for highlight in &card.technical_highlights {
                    html.push_str(&format!("<li>{}</li>", escape(highlight)));
                }
                html.push_str("</ul>\n");
            }
            CardSection::Links => {
                html.push_str("<div class=\"links\">");
                for link in &card.links {
                    html.push_str(&format!(
                        "<a class=\"link-btn\" href=\"{}\" {}>{} ↗</a>",
                        escape(&link.href),
                        OUTBOUND,
                        escape(&link.label)
                    ));
                }
                html.push_str("</div>\n");
            }
            CardSection::DetailsCallToAction => {
                if let Some(href) = &card.details_link {
                    html.push_str(&format!(
                        "<a class=\"details-cta\" href=\"{}\" {}>More details (GitHub) ↗</a>\n",
                        escape(href),
                        OUTBOUND
                    ));
                }
            }
        }
    }
    if body_open {
        html.push_str("</div>\n");
    }

    html.push_str("</article>\n");
}

fn render_media(html: &mut String, card: &ProjectCardDto) {
    html.push_str("<div class=\"media\">");
    match &card.media {
        MediaSlotDto::Placeholder => html.push_str("<div class=\"media-placeholder\"></div>"),
        MediaSlotDto::Video {
            watch_url,
            thumbnail_url,
            alt_text,
            ..
        } => {
            html.push_str(&format!(
                "<a href=\"{}\" {} aria-label=\"Watch video: {}\" title=\"Watch on YouTube\">\
                 <img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>",
                escape(watch_url),
                OUTBOUND,
                escape(&card.title),
                escape(thumbnail_url),
                escape(alt_text)
            ));
        }
    }
    html.push_str("</div>\n");
}

fn render_list_section(html: &mut String, id: &str, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n<ul>",
        id,
        escape(title)
    ));
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape(item)));
    }
    html.push_str("</ul>\n</section>\n");
}

fn render_profile_links(html: &mut String, profile: &Profile) {
    let links = profile.links.labeled();
    if links.is_empty() {
        return;
    }
    html.push_str("<section id=\"links\">\n<h2>Links</h2>\n<ul>");
    for (label, href) in links {
        html.push_str(&format!(
            "<li><a href=\"{}\" {}>{}</a></li>",
            escape(href),
            OUTBOUND,
            escape(label)
        ));
    }
    html.push_str("</ul>\n</section>\n");
}

fn pill(text: &str) -> String {
    format!("<span class=\"pill\">{}</span>", escape(text))
}

/// Escape text for element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
