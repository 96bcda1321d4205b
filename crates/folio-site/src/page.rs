//! Static document markup.
//!
//! Each section is a small builder so the pieces can be tested on their
//! own. Dynamic behavior (typing, filtering, chat) attaches to the ids and
//! data attributes emitted here.

use std::fmt::Write as _;

use folio_config::{FolioConfig, OwnerConfig};
use folio_core::entities::ChatMessage;
use folio_core::enums::{Category, CategoryFilter, Theme};
use folio_projects::FilterOutcome;
use folio_projects::render::{escape_html, render_cards, render_no_results};
use folio_projects::PlaceholderChange;

/// Nav entries in page order: section id and label.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Everything the document needs, borrowed from the portfolio.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub config: &'a FolioConfig,
    pub theme: Theme,
    pub filter: &'a FilterOutcome,
    pub transcript: Vec<&'a ChatMessage>,
}

/// The full HTML document.
#[must_use]
pub fn render_document(ctx: &PageContext<'_>) -> String {
    let site = &ctx.config.site;
    let mut html = String::with_capacity(16 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"css/style.css\">\n\
         </head>\n<body>\n",
        theme = ctx.theme.as_str(),
        title = escape_html(&site.title),
    );
    html.push_str(&render_nav(ctx.theme));
    html.push_str(&render_hero(ctx.config));
    html.push_str(&render_about(&ctx.config.owner));
    html.push_str(&render_skills(&ctx.config.owner));
    html.push_str(&render_projects(ctx.filter, site.search_debounce_ms));
    html.push_str(&render_contact(&ctx.config.owner));
    html.push_str(&render_chat(&ctx.transcript));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_nav(theme: Theme) -> String {
    let links = SECTIONS.iter().fold(String::new(), |mut acc, (id, label)| {
        let _ = write!(
            acc,
            "<li><a href=\"#{id}\" class=\"nav-link\">{label}</a></li>"
        );
        acc
    });
    format!(
        "<nav class=\"navbar\"><ul class=\"nav-menu\">{links}</ul>\
         <button class=\"theme-toggle\" id=\"themeToggle\" aria-label=\"Toggle theme\">\
         <i class=\"{icon}\"></i></button></nav>\n",
        icon = theme.toggle_icon(),
    )
}

fn render_hero(config: &FolioConfig) -> String {
    let owner = &config.owner;
    let typing = &config.typing;
    let texts = serde_json::to_string(&typing.texts).unwrap_or_else(|_| String::from("[]"));
    let first = typing.texts.first().map_or("", String::as_str);
    format!(
        "<section id=\"home\" class=\"hero\"><div class=\"hero-content\">\
         <h1 class=\"hero-title\">Hi, I'm <span class=\"highlight\">{name}</span></h1>\
         <h2 class=\"hero-subtitle\"><span id=\"typing-text\" data-texts=\"{texts}\" \
         data-type-speed=\"{type_speed}\" data-delete-speed=\"{delete_speed}\" \
         data-pause=\"{pause}\" data-loop=\"{looping}\" data-scramble=\"{scramble}\">{first}</span>\
         <span class=\"cursor\">{cursor}</span></h2>\
         <p class=\"hero-description\">{role} based in {location}.</p>\
         </div></section>\n",
        name = escape_html(&owner.name),
        texts = escape_html(&texts),
        type_speed = typing.type_speed_ms,
        delete_speed = typing.delete_speed_ms,
        pause = typing.pause_ms,
        looping = typing.looping,
        scramble = typing.scramble,
        first = escape_html(first),
        cursor = escape_html(&typing.cursor),
        role = escape_html(&owner.role),
        location = escape_html(&owner.location),
    )
}

fn render_about(owner: &OwnerConfig) -> String {
    format!(
        "<section id=\"about\" class=\"about animate-on-scroll\"><h2 class=\"section-title\">About Me</h2>\
         <div class=\"stats\">\
         <div class=\"stat\"><h3 data-counter>{experience}</h3><p>Experience</p></div>\
         <div class=\"stat\"><h3 data-counter>{projects}</h3><p>Projects</p></div>\
         </div><p>{interests}</p></section>\n",
        experience = escape_html(&owner.experience),
        projects = escape_html(&owner.projects_summary),
        interests = escape_html(&owner.interests),
    )
}

fn render_skills(owner: &OwnerConfig) -> String {
    let groups = [
        ("Frontend", &owner.skills.frontend),
        ("Backend", &owner.skills.backend),
        ("Database", &owner.skills.database),
        ("Tools", &owner.skills.tools),
    ];
    let mut cards = String::new();
    for (label, skills) in groups {
        if skills.is_empty() {
            continue;
        }
        let items = skills.iter().fold(String::new(), |mut acc, skill| {
            let _ = write!(acc, "<li class=\"stagger-item\">{}</li>", escape_html(skill));
            acc
        });
        let _ = write!(
            cards,
            "<div class=\"skill-card animate-on-scroll\"><h3>{label}</h3><ul>{items}</ul></div>"
        );
    }
    format!(
        "<section id=\"skills\" class=\"skills\"><h2 class=\"section-title\">Skills</h2>\
         <div class=\"skills-grid\">{cards}</div></section>\n"
    )
}

/// Filter buttons: "All" first, then every category.
#[must_use]
pub fn render_filter_buttons(active: CategoryFilter) -> String {
    let mut buttons = String::new();
    let all = std::iter::once((CategoryFilter::All, "All"));
    let categories = Category::ALL
        .into_iter()
        .map(|c| (CategoryFilter::Only(c), c.button_label()));
    for (filter, label) in all.chain(categories) {
        let class = if filter == active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let _ = write!(
            buttons,
            "<button class=\"{class}\" data-category=\"{}\">{label}</button>",
            filter.as_str()
        );
    }
    buttons
}

fn render_projects(outcome: &FilterOutcome, debounce_ms: u64) -> String {
    let grid = match &outcome.placeholder {
        PlaceholderChange::Show(no_results) if outcome.total > 0 => render_no_results(no_results),
        _ => render_cards(&outcome.visible),
    };
    let search_info = outcome.search_info.as_ref().map_or_else(
        || String::from("<div id=\"search-results\" class=\"search-results-info\" style=\"display:none\"></div>"),
        |info| {
            format!(
                "<div id=\"search-results\" class=\"search-results-info{}\">{}</div>",
                if info.empty { " no-results" } else { "" },
                escape_html(&info.message)
            )
        },
    );
    format!(
        "<section id=\"projects\" class=\"projects\"><h2 class=\"section-title\">Projects</h2>\
         <div class=\"project-controls\">\
         <input type=\"search\" id=\"project-search\" placeholder=\"Search projects...\" \
         value=\"{term}\" data-debounce=\"{debounce_ms}\">\
         <div class=\"filter-buttons\">{buttons}</div></div>\
         {search_info}\
         <p id=\"project-count\">{count}</p>\
         <div class=\"projects-grid\">{grid}</div></section>\n",
        term = escape_html(&outcome.state.search_term),
        buttons = render_filter_buttons(outcome.state.category),
        count = escape_html(&outcome.count_text),
    )
}

fn render_contact(owner: &OwnerConfig) -> String {
    format!(
        "<section id=\"contact\" class=\"contact\"><h2 class=\"section-title\">Contact</h2>\
         <div class=\"contact-info\"><p><i class=\"fas fa-envelope\"></i> {email}</p>\
         <p><i class=\"fas fa-phone\"></i> {phone}</p>\
         <p><i class=\"fas fa-map-marker-alt\"></i> {location}</p></div>\
         <form class=\"contact-form\">\
         <input type=\"text\" name=\"name\" placeholder=\"Your Name\">\
         <input type=\"email\" name=\"email\" placeholder=\"Your Email\">\
         <input type=\"text\" name=\"subject\" placeholder=\"Subject\">\
         <textarea name=\"message\" placeholder=\"Your Message\"></textarea>\
         <button type=\"submit\" class=\"btn btn-primary\">Send Message</button>\
         </form></section>\n",
        email = escape_html(&owner.email),
        phone = escape_html(&owner.phone),
        location = escape_html(&owner.location),
    )
}

fn render_chat(transcript: &[&ChatMessage]) -> String {
    let messages = transcript.iter().fold(String::new(), |mut acc, message| {
        let _ = write!(
            acc,
            "<div class=\"message {}\">{}</div>",
            message.role.css_class(),
            escape_html(&message.text)
        );
        acc
    });
    format!(
        "<button class=\"chat-toggle\" id=\"chatToggle\"><i class=\"fas fa-comments\"></i></button>\
         <div class=\"chat-widget\" id=\"chatWidget\">\
         <div class=\"chat-header\"><span>Ask me anything</span>\
         <button id=\"chatClose\">&times;</button></div>\
         <div class=\"chat-messages\" id=\"chatMessages\">{messages}</div>\
         <div class=\"typing-indicator\" id=\"typingIndicator\" style=\"display:none\">\
         <span></span><span></span><span></span></div>\
         <form class=\"chat-form\" id=\"chatForm\">\
         <textarea id=\"chatInput\" placeholder=\"Type your message...\"></textarea>\
         <button type=\"submit\" id=\"chatSend\">Send</button></form></div>\n"
    )
}
