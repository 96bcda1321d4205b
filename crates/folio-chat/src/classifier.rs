//! Keyword classifier for the canned answers.
//!
//! Topics are tested in a fixed order and the first topic with any keyword
//! contained in the lower-cased message wins. Matching is plain substring
//! containment, so `"hi"` also fires inside `"this"`.

use folio_config::OwnerConfig;

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// Question topics with a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Contact,
    Skills,
    Experience,
    Projects,
    Location,
    Greeting,
}

impl Topic {
    /// Topics in match priority order.
    pub const PRIORITY: [Self; 6] = [
        Self::Contact,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Location,
        Self::Greeting,
    ];

    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["email", "contact"],
            Self::Skills => &["skill", "technology", "tech stack"],
            Self::Experience => &["experience", "work", "job"],
            Self::Projects => &["project", "portfolio", "work sample"],
            Self::Location => &["location", "where", "based"],
            Self::Greeting => &["hello", "hi", "hey"],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Location => "location",
            Self::Greeting => "greeting",
        }
    }

    /// First topic whose keywords appear in `message`.
    #[must_use]
    pub fn detect(message: &str) -> Option<Self> {
        let lowered = message.to_lowercase();
        Self::PRIORITY.into_iter().find(|topic| {
            topic
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Maps visitor questions to canned replies about the site owner.
#[derive(Debug, Clone)]
pub struct Classifier {
    owner: OwnerConfig,
}

impl Classifier {
    #[must_use]
    pub const fn new(owner: OwnerConfig) -> Self {
        Self { owner }
    }

    #[must_use]
    pub const fn owner(&self) -> &OwnerConfig {
        &self.owner
    }

    /// Canned reply for `message`, or `None` when no topic matches.
    #[must_use]
    pub fn classify(&self, message: &str) -> Option<String> {
        Topic::detect(message).map(|topic| self.reply(topic))
    }

    /// The canned reply for `topic`.
    #[must_use]
    pub fn reply(&self, topic: Topic) -> String {
        let owner = &self.owner;
        let name = &owner.name;
        match topic {
            Topic::Contact => format!(
                "You can reach {name} at {} or call {}. {name} is based in {}.",
                owner.email, owner.phone, owner.location
            ),
            Topic::Skills => {
                let skills: Vec<&str> = owner.skills.all().collect();
                format!(
                    "{name}'s skills include: {}. {name} has {} of experience and has {}.",
                    skills.join(", "),
                    owner.experience,
                    owner.projects_summary
                )
            }
            Topic::Experience => format!(
                "{name} has {} in web development and has {}. \
                 The focus is full-stack development with modern technologies.",
                owner.experience, owner.projects_summary
            ),
            Topic::Projects => format!(
                "{name} has {} using various technologies. You can view the featured \
                 projects in the Projects section above. {name} is passionate about {}.",
                owner.projects_summary,
                owner.interests.to_lowercase()
            ),
            Topic::Location => format!("{name} is based in {}.", owner.location),
            Topic::Greeting => format!(
                "Hello! I'm {name}'s AI assistant. I can help you learn about skills, \
                 experience, projects, or contact information. What would you like to know?"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classifier() -> Classifier {
        Classifier::new(OwnerConfig::default())
    }

    #[rstest]
    #[case("What's your email?", Some(Topic::Contact))]
    #[case("How do I CONTACT you", Some(Topic::Contact))]
    #[case("what technology do you use", Some(Topic::Skills))]
    #[case("Tell me your tech stack", Some(Topic::Skills))]
    #[case("any job history?", Some(Topic::Experience))]
    #[case("show me the portfolio", Some(Topic::Projects))]
    #[case("Where are you?", Some(Topic::Location))]
    #[case("hey", Some(Topic::Greeting))]
    #[case("tell me a joke", None)]
    #[case("", None)]
    fn detects_topics(#[case] message: &str, #[case] expected: Option<Topic>) {
        assert_eq!(Topic::detect(message), expected);
    }

    #[test]
    fn earlier_topics_win() {
        // "work" is an experience keyword and is checked before "work sample".
        assert_eq!(Topic::detect("any work samples?"), Some(Topic::Experience));
        // Contact beats skills.
        assert_eq!(
            Topic::detect("email me your skills"),
            Some(Topic::Contact)
        );
    }

    #[test]
    fn substring_matching_is_literal() {
        assert_eq!(Topic::detect("is this thing on"), Some(Topic::Greeting));
    }

    #[test]
    fn contact_reply_has_email_and_phone() {
        let owner = OwnerConfig::default();
        let reply = classifier().classify("What's your email?").unwrap();
        assert!(reply.contains(&owner.email));
        assert!(reply.contains(&owner.phone));
    }

    #[test]
    fn skills_reply_lists_every_skill_in_order() {
        let reply = classifier().reply(Topic::Skills);
        assert!(reply.contains("HTML5, CSS3, JavaScript, React, Node.js"));
        assert!(reply.contains("Figma"));
    }

    #[test]
    fn unmatched_message_has_no_reply() {
        assert_eq!(classifier().classify("tell me a joke"), None);
    }
}
