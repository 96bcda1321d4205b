//! Site owner profile used by the page copy and the chat assistant.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    String::from("Jordan Cruz")
}

fn default_role() -> String {
    String::from("Full-stack developer")
}

fn default_location() -> String {
    String::from("Manila, Philippines")
}

fn default_email() -> String {
    String::from("hello@example.com")
}

fn default_phone() -> String {
    String::from("+63 900 000 0000")
}

fn default_experience() -> String {
    String::from("1+ years")
}

fn default_projects_summary() -> String {
    String::from("5+ projects completed")
}

fn default_interests() -> String {
    String::from(
        "Creating innovative solutions, open-source projects, exploring new technologies",
    )
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerConfig {
    /// Display name used in page copy and chat replies.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    /// Free-form experience summary (e.g., "3 years").
    #[serde(default = "default_experience")]
    pub experience: String,

    /// Free-form project count summary (e.g., "5+ projects completed").
    #[serde(default = "default_projects_summary")]
    pub projects_summary: String,

    #[serde(default)]
    pub skills: SkillsConfig,

    #[serde(default = "default_interests")]
    pub interests: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            role: default_role(),
            location: default_location(),
            email: default_email(),
            phone: default_phone(),
            experience: default_experience(),
            projects_summary: default_projects_summary(),
            skills: SkillsConfig::default(),
            interests: default_interests(),
        }
    }
}

/// Skill lists grouped the way the skills section lays them out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillsConfig {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            frontend: owned(&["HTML5", "CSS3", "JavaScript", "React"]),
            backend: owned(&["Node.js", "Python", "PHP"]),
            database: owned(&["MongoDB", "MySQL"]),
            tools: owned(&["Git", "Docker", "AWS", "Figma"]),
        }
    }
}

impl SkillsConfig {
    /// Every skill in section order: frontend, backend, database, tools.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.frontend
            .iter()
            .chain(&self.backend)
            .chain(&self.database)
            .chain(&self.tools)
            .map(String::as_str)
    }
}
