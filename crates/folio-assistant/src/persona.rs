// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persona preamble and prompt composition for remote completions.

use std::fmt;

use folio_config::Profile;
use folio_config::model::AssistantConfig;
use tracing::{info, warn};

/// Fixed preamble plus the framing wrapped around each utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    preamble: String,
    owner_name: String,
    max_words: u32,
}

impl Persona {
    /// Builds the persona from a structured profile.
    pub fn from_profile(profile: &Profile, max_words: u32) -> Self {
        Self {
            preamble: render_preamble(profile),
            owner_name: profile.first_name.clone(),
            max_words,
        }
    }

    /// Uses `preamble` verbatim.
    pub fn from_text(preamble: impl Into<String>, owner_name: impl Into<String>, max_words: u32) -> Self {
        Self {
            preamble: preamble.into(),
            owner_name: owner_name.into(),
            max_words,
        }
    }

    /// Loads the persona following priority: `persona_file` > built-in profile.
    ///
    /// An unreadable or empty file is logged and the built-in profile is used.
    pub async fn load(config: &AssistantConfig, profile: &Profile) -> Self {
        if let Some(path) = &config.persona_file {
            match tokio::fs::read_to_string(path).await {
                Ok(content) if !content.trim().is_empty() => {
                    info!(path = %path, "loaded persona preamble from file");
                    return Self::from_text(content.trim(), profile.first_name.clone(), config.max_words);
                }
                Ok(_) => warn!(path = %path, "persona file is empty, using built-in profile"),
                Err(e) => warn!(
                    path = %path,
                    error = %e,
                    "failed to read persona file, using built-in profile"
                ),
            }
        }
        Self::from_profile(profile, config.max_words)
    }

    /// The text placed before every question.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The full prompt sent for `utterance`: preamble, then the literal question.
    pub fn compose_prompt(&self, utterance: &str) -> String {
        format!(
            "{}\n\nUser question: \"{}\"\n\nRespond as {}'s assistant (keep it under {} words):",
            self.preamble, utterance, self.owner_name, self.max_words
        )
    }
}

/// Renders the profile and personality rules into preamble text.
pub fn render_preamble(profile: &Profile) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_preamble(&mut out, profile);
    out
}

fn write_preamble(out: &mut impl fmt::Write, profile: &Profile) -> fmt::Result {
    let name = &profile.first_name;
    let their = &profile.possessive;

    writeln!(
        out,
        "You are {}'s personal assistant helping visitors learn about {their} portfolio.",
        profile.full_name
    )?;
    writeln!(
        out,
        "NEVER reveal that you are an AI, chatbot, or automated system. If asked, say you're {name}'s assistant managing {their} portfolio inquiries."
    )?;
    writeln!(out, "Be conversational, witty, and helpful. Use emojis naturally but don't overdo it.")?;

    if !profile.experience.is_empty() || !profile.publications.is_empty() {
        writeln!(out, "\nEXPERIENCE:")?;
        for exp in &profile.experience {
            writeln!(out, "- {} at {} ({}): {}", exp.role, exp.organization, exp.period, exp.highlights)?;
        }
        for publication in &profile.publications {
            writeln!(out, "- Authored {publication}")?;
        }
    }

    if !profile.skills.is_empty() {
        writeln!(out, "\nSKILLS: {}", profile.skills.join(", "))?;
    }

    if !profile.projects.is_empty() {
        writeln!(out, "\nPROJECTS:")?;
        for (i, project) in profile.projects.iter().enumerate() {
            writeln!(out, "{}. {} - {}", i + 1, project.name, project.summary)?;
        }
    }

    if !profile.education.is_empty() {
        writeln!(out, "\nEDUCATION: {}", profile.education)?;
    }
    if !profile.achievements.is_empty() {
        writeln!(out, "\nACHIEVEMENTS: {}", profile.achievements.join(", "))?;
    }

    writeln!(out, "\nCONTACT & SOCIAL MEDIA:")?;
    writeln!(out, "- Email: {}", profile.email)?;
    for link in &profile.socials {
        writeln!(out, "- {}: {}", link.platform, link.url)?;
    }
    if let Some(handle) = &profile.leetcode {
        writeln!(out, "\nLEETCODE: Username is \"{handle}\"")?;
    }

    writeln!(out, "\nPERSONALITY GUIDELINES:")?;
    writeln!(out, "- NEVER say \"I'm an AI\", \"I'm a chatbot\" or \"I'm automated\"")?;
    writeln!(out, "- If asked what you are, say \"I'm {name}'s assistant helping manage {their} portfolio inquiries\"")?;
    writeln!(out, "- Keep responses concise (2-3 sentences max unless explaining projects)")?;
    writeln!(out, "- If asked about social media, provide the relevant links")?;
    write!(out, "- If you don't know something specific, suggest they contact {name} directly")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_lists_projects_and_links() {
        let preamble = render_preamble(&Profile::default());
        assert!(preamble.contains("1. Safe Space"));
        assert!(preamble.contains("6. Sahayak"));
        assert!(preamble.contains("https://github.com/HaryiankKumra"));
        assert!(preamble.contains("SKILLS: React.js, Python"));
    }

    #[test]
    fn custom_profile_preamble_names_only_that_owner() {
        let profile = Profile {
            first_name: "Ada".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            possessive: "her".into(),
            tagline: String::new(),
            experience: Vec::new(),
            publications: Vec::new(),
            skills: vec!["Analysis".into()],
            projects: Vec::new(),
            education: String::new(),
            achievements: Vec::new(),
            socials: Vec::new(),
            leetcode: None,
        };

        let preamble = render_preamble(&profile);
        assert!(preamble.starts_with("You are Ada Lovelace's personal assistant helping visitors learn about her portfolio."));
        assert!(preamble.contains("- Email: ada@example.com"));
        assert!(!preamble.contains("Haryiank"));
        assert!(!preamble.contains(" his "));
        assert!(!preamble.contains("PROJECTS:"));
    }

    #[test]
    fn prompt_is_preamble_then_literal_utterance() {
        let persona = Persona::from_text("PREAMBLE", "Ada", 50);
        let prompt = persona.compose_prompt("What's new?");
        assert!(prompt.starts_with("PREAMBLE\n\n"));
        assert!(prompt.contains("User question: \"What's new?\""));
        assert!(prompt.ends_with("Respond as Ada's assistant (keep it under 50 words):"));
    }

    #[tokio::test]
    async fn persona_file_overrides_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.txt");
        std::fs::write(&path, "  Custom persona.  \n").unwrap();

        let config = AssistantConfig {
            persona_file: Some(path.display().to_string()),
            ..AssistantConfig::default()
        };
        let persona = Persona::load(&config, &Profile::default()).await;
        assert_eq!(persona.preamble(), "Custom persona.");
    }

    #[tokio::test]
    async fn missing_persona_file_falls_back_to_profile() {
        let config = AssistantConfig {
            persona_file: Some("/nonexistent/persona.txt".into()),
            ..AssistantConfig::default()
        };
        let persona = Persona::load(&config, &Profile::default()).await;
        assert!(persona.preamble().contains("PROJECTS:"));
    }
}
