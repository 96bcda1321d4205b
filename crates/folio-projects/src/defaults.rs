//! Built-in portfolio entries.
//!
//! Edit these to change what the site shows when no `site.projects_file` is
//! configured. Dates drive display order (newest first).

use chrono::{DateTime, NaiveDate, Utc};

use folio_core::entities::Project;
use folio_core::enums::Category;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(DateTime::<Utc>::MIN_UTC, |naive| naive.and_utc())
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Projects shown on first render.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Workout Simulation for Nelstar and Adam Fitness Gym".into(),
            description: "A web-based fitness platform that lets users simulate personalized \
                          workout routines, view exercise techniques, and track virtual progress, \
                          combining fitness expertise with modern web technologies to boost \
                          engagement and motivation."
                .into(),
            image: "/assets/nelstar.png".into(),
            demo_link: String::new(),
            code_link: "https://github.com/yourusername/nelstar-gym".into(),
            technologies: tags(&["Html5", "CSS", "JavaScript", "PHP", "MySQL"]),
            category: Category::Web,
            created_at: date(2025, 3, 15),
        },
        Project {
            id: "2".into(),
            title: "Sampayan Weather Checker".into(),
            description: "Real-time weather updates and forecasts for any location (Mini Project)."
                .into(),
            image: "/assets/sampayan.png".into(),
            demo_link: "https://sampay.vercel.app/".into(),
            code_link: "https://github.com/yourusername/sampayan-weather".into(),
            technologies: tags(&["HTML5", "CSS", "JavaScript", "Weather API"]),
            category: Category::Web,
            created_at: date(2024, 4, 10),
        },
        Project {
            id: "3".into(),
            title: "Level up IRL".into(),
            description: "A website that helps users improve their real-life skills through \
                          interactive challenges and tutorials."
                .into(),
            image: "/assets/level.png".into(),
            demo_link: String::new(),
            code_link: "https://github.com/yourusername/level-up-irl".into(),
            technologies: tags(&["Html5", "CSS", "JavaScript"]),
            category: Category::Mobile,
            created_at: date(2024, 4, 5),
        },
    ]
}

/// Projects appended by the "load more" button.
pub fn additional_projects() -> Vec<Project> {
    vec![
        Project {
            id: "4".into(),
            title: "Social Media Dashboard".into(),
            description: "A comprehensive dashboard for managing multiple social media accounts \
                          with analytics and scheduling."
                .into(),
            image: String::new(),
            demo_link: "#".into(),
            code_link: "#".into(),
            technologies: tags(&["React", "Redux", "Node.js"]),
            category: Category::Web,
            created_at: date(2024, 2, 20),
        },
        Project {
            id: "5".into(),
            title: "Cryptocurrency Tracker".into(),
            description: "Real-time cryptocurrency price tracking with portfolio management and \
                          price alerts."
                .into(),
            image: String::new(),
            demo_link: "#".into(),
            code_link: "#".into(),
            technologies: tags(&["Vue.js", "Chart.js", "API"]),
            category: Category::Api,
            created_at: date(2024, 1, 12),
        },
        Project {
            id: "6".into(),
            title: "Recipe Finder App".into(),
            description: "A mobile-first recipe application with ingredient-based search and \
                          meal planning features."
                .into(),
            image: String::new(),
            demo_link: "#".into(),
            code_link: "#".into(),
            technologies: tags(&["React Native", "Firebase", "API"]),
            category: Category::Mobile,
            created_at: date(2023, 11, 30),
        },
    ]
}
