//! Card markup for the projects grid.
//!
//! Pure string builders. Every interpolated field goes through
//! [`escape_html`], links included.

use std::fmt::Write as _;

use folio_core::entities::Project;

use crate::filter::NoResults;

const PLACEHOLDER_STYLE: &str = "align-items:center; justify-content:center; width:100%; \
                                 height:100%; background:linear-gradient(135deg, #667eea, #764ba2); \
                                 color:white; font-size:3rem;";

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Card date label, e.g. `Mar 15, 2025`.
#[must_use]
pub fn format_date(project: &Project) -> String {
    project.created_at.format("%b %-d, %Y").to_string()
}

/// CSS `animation-delay` for the card at `index`: a tenth of a second per slot.
#[must_use]
pub fn animation_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}

fn image_block(project: &Project) -> String {
    if project.image.is_empty() {
        return format!(
            "<div class=\"project-placeholder\" style=\"display:flex; {PLACEHOLDER_STYLE}\"><i class=\"fas fa-code\"></i></div>"
        );
    }
    format!(
        "<img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" \
         onerror=\"this.style.display='none'; this.nextElementSibling.style.display='flex';\">\
         <div class=\"project-placeholder\" style=\"display:none; {PLACEHOLDER_STYLE}\"><i class=\"fas fa-code\"></i></div>",
        src = escape_html(&project.image),
        alt = escape_html(&project.title),
    )
}

fn link(href: &str, class: &str, icon: &str, label: &str) -> String {
    if !Project::has_link(href) {
        return String::new();
    }
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-link {class}\"><i class=\"{icon}\"></i> {label}</a>",
        escape_html(href)
    )
}

/// Markup of a single project card.
#[must_use]
pub fn render_card(project: &Project, index: usize) -> String {
    let badges = project.tech_badges().fold(String::new(), |mut acc, tech| {
        let _ = write!(acc, "<span class=\"tech-badge\">{}</span>", escape_html(tech));
        acc
    });
    let category = project.category;

    let mut card = String::with_capacity(1024);
    let _ = write!(
        card,
        "<div class=\"project-card\" data-id=\"{id}\" data-index=\"{index}\" data-category=\"{cat}\" style=\"animation-delay: {delay};\">\
         <div class=\"project-image\">{image}</div>\
         <div class=\"project-content\">\
         <h3 class=\"project-title\">{title}</h3>\
         <p class=\"project-description\">{description}</p>\
         <div class=\"project-tech\">{badges}</div>\
         <div class=\"project-links\">{demo}{code}</div>\
         <div class=\"project-meta\">\
         <small class=\"project-date\"><i class=\"fas fa-calendar-alt\"></i> {date}</small>\
         <span class=\"project-category {cat}\"><i class=\"{icon}\"></i> {category_name}</span>\
         </div></div></div>",
        id = escape_html(&project.id),
        cat = category.as_str(),
        delay = animation_delay(index),
        image = image_block(project),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        demo = link(&project.demo_link, "demo", "fas fa-external-link-alt", "Live Demo"),
        code = link(&project.code_link, "code", "fab fa-github", "View Code"),
        date = format_date(project),
        icon = category.icon_class(),
        category_name = category.display_name(),
    );
    card
}

/// Markup for the whole grid; the empty state when there is nothing to show.
#[must_use]
pub fn render_cards(projects: &[Project]) -> String {
    if projects.is_empty() {
        return render_empty_state();
    }
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| render_card(project, index))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_empty_state() -> String {
    "<div class=\"empty-state\" style=\"grid-column: 1/-1;\">\
     <i class=\"fas fa-folder-open\"></i>\
     <h3>No projects available</h3>\
     <p>Check back soon for new projects!</p>\
     </div>"
        .to_string()
}

/// The filter's "no results" placeholder with its clear-filters button.
#[must_use]
pub fn render_no_results(no_results: &NoResults) -> String {
    format!(
        "<div id=\"no-results\" class=\"empty-state\" style=\"grid-column: 1/-1;\">\
         <i class=\"fas fa-search\"></i>\
         <h3>No Results Found</h3>\
         <p>{}</p>\
         <button class=\"btn btn-primary\" data-action=\"clear-filters\">Clear Filters</button>\
         </div>",
        escape_html(&no_results.message)
    )
}
