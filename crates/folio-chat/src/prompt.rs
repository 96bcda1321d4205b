//! Prompt construction and cleanup of generated text.

use std::fmt::Write as _;

use regex::RegexBuilder;

use folio_config::OwnerConfig;

/// Context-injected prompt for the hosted model.
#[must_use]
pub fn build_prompt(owner: &OwnerConfig, question: &str) -> String {
    let name = &owner.name;
    let skills: Vec<&str> = owner.skills.all().collect();

    let mut prompt = String::with_capacity(512 + question.len());
    let _ = writeln!(
        prompt,
        "You are an AI assistant for {name}'s portfolio website.\n"
    );
    let _ = writeln!(prompt, "About {name}:");
    let _ = writeln!(prompt, "- {} from {}", owner.role, owner.location);
    let _ = writeln!(prompt, "- Skills: {}", skills.join(", "));
    let _ = writeln!(prompt, "- Experience: {}", owner.experience);
    let _ = writeln!(prompt, "- Projects: {}", owner.projects_summary);
    let _ = writeln!(prompt, "- Contact: {}, {}", owner.email, owner.phone);
    let _ = writeln!(prompt, "- Interests: {}\n", owner.interests);
    let _ = writeln!(
        prompt,
        "Please respond to this visitor question in a helpful, professional way: {question}\n"
    );
    let _ = write!(
        prompt,
        "Keep responses concise and focused on {name}'s qualifications and portfolio."
    );
    prompt
}

/// Strip an echoed prompt from generated text.
///
/// If a line mentioning the visitor question (or "Please respond") is
/// followed by more lines, everything after it is the answer. Otherwise
/// anything up to the first colon on a line naming the owner is removed.
/// A blank result becomes a generic offer to help.
#[must_use]
pub fn clean_response(generated: &str, owner_name: &str) -> String {
    let lines: Vec<&str> = generated.split('\n').collect();
    let marker = lines
        .iter()
        .position(|line| line.contains("visitor question") || line.contains("Please respond"));

    let cleaned = match marker {
        Some(index) if index + 1 < lines.len() => lines[index + 1..].join("\n").trim().to_string(),
        _ => strip_name_prefix(generated, owner_name),
    };

    if cleaned.is_empty() {
        default_answer(owner_name)
    } else {
        cleaned
    }
}

fn strip_name_prefix(generated: &str, owner_name: &str) -> String {
    let pattern = format!("^.*?{}.*?:", regex::escape(owner_name));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.replace(generated, "").trim().to_string(),
        Err(error) => {
            tracing::debug!(%error, "owner name pattern failed to compile");
            generated.trim().to_string()
        }
    }
}

fn default_answer(owner_name: &str) -> String {
    format!("I'd be happy to help you learn more about {owner_name}'s background and skills!")
}

/// Reply shown when the hosted fallback fails for any reason.
#[must_use]
pub fn apology(owner_name: &str) -> String {
    format!(
        "Sorry, I'm having trouble connecting right now. Try asking about {owner_name}'s \
         skills, experience, or contact information!"
    )
}

/// Greeting posted when the widget opens on an empty transcript.
#[must_use]
pub fn welcome(owner_name: &str) -> String {
    format!(
        "Feel free to ask me about {owner_name}'s skills, experience, projects, or contact information!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME: &str = "Jordan Cruz";

    #[test]
    fn prompt_carries_owner_context_and_question() {
        let owner = OwnerConfig::default();
        let prompt = build_prompt(&owner, "Do you freelance?");
        assert!(prompt.starts_with("You are an AI assistant for Jordan Cruz's portfolio website."));
        assert!(prompt.contains("- Contact: hello@example.com, +63 900 000 0000"));
        assert!(prompt.contains("professional way: Do you freelance?"));
        assert!(prompt.contains("Skills: HTML5, CSS3"));
    }

    #[test]
    fn echoed_prompt_is_dropped_after_marker_line() {
        let owner = OwnerConfig::default();
        let prompt = build_prompt(&owner, "Do you freelance?");
        let generated = format!("{prompt}\nYes, freelance work is welcome.");
        // The marker line is followed by the rest of the prompt plus the answer.
        let cleaned = clean_response(&generated, NAME);
        assert!(cleaned.ends_with("Yes, freelance work is welcome."));
        assert!(!cleaned.contains("Please respond"));
    }

    #[test]
    fn marker_on_last_line_falls_back_to_name_strip() {
        let generated = "Jordan Cruz says: Please respond";
        assert_eq!(clean_response(generated, NAME), "Please respond");
    }

    #[test]
    fn name_prefix_is_stripped_case_insensitively() {
        let generated = "assistant for jordan cruz: Happy to chat about React.";
        assert_eq!(clean_response(generated, NAME), "Happy to chat about React.");
    }

    #[test]
    fn plain_text_is_trimmed() {
        assert_eq!(clean_response("  Sure thing.  ", NAME), "Sure thing.");
    }

    #[test]
    fn empty_result_uses_default_sentence() {
        assert_eq!(
            clean_response("About Jordan Cruz:", NAME),
            "I'd be happy to help you learn more about Jordan Cruz's background and skills!"
        );
        assert_eq!(clean_response("   ", NAME), default_answer(NAME));
    }

    #[test]
    fn apology_names_the_fallback_topics() {
        let text = apology(NAME);
        assert!(text.contains("skills"));
        assert!(text.contains("experience"));
        assert!(text.contains("contact information"));
    }
}
