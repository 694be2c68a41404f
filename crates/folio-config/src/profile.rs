// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The portfolio owner's profile, configured under `[profile]`.
//!
//! A `[profile]` section replaces the built-in profile as a whole. Only
//! `first_name`, `full_name` and `email` are required; list fields default to
//! empty so a custom profile never inherits facts about someone else.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Everything the assistant is allowed to state about the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Short name used in conversation ("Haryiank").
    pub first_name: String,
    pub full_name: String,
    /// Address quoted in contact fallbacks and used to sign auto-replies.
    pub email: String,

    /// Possessive pronoun used in generated text ("his", "her", "their").
    #[serde(default = "default_possessive")]
    pub possessive: String,

    /// Line under the signature of contact auto-replies.
    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub leetcode: Option<String>,
}

fn default_possessive() -> String {
    "their".to_string()
}

/// The profile used when no `[profile]` section is configured.
pub static BUILT_IN: LazyLock<Profile> = LazyLock::new(Profile::default);

impl Default for Profile {
    fn default() -> Self {
        let s = |v: &str| v.to_string();
        Self {
            first_name: s("Haryiank"),
            full_name: s("Haryiank Kumra"),
            email: s("haryiank1kumra@gmail.com"),
            possessive: s("his"),
            tagline: s("Full Stack Developer & AI Enthusiast"),
            experience: vec![
                Experience {
                    role: s("Research Intern"),
                    organization: s("TIET Patiala"),
                    period: s("June 2025 - Aug 2025"),
                    highlights: s("multimodal stress detection across 200+ subjects; 85% accuracy with Vision Transformer and ResNet"),
                },
                Experience {
                    role: s("External Secretary"),
                    organization: s("ISTE"),
                    period: s("Sept 2023 - Present"),
                    highlights: s("manages 200+ members, secured INR 1.5+ lakhs in sponsorships, coordinated 12 technical workshops for 300+ participants"),
                },
            ],
            publications: vec![s("2 IEEE research papers on emotion recognition and physiological signal analysis")],
            skills: ["React.js", "Python", "Node.js", "Three.js", "Git", "Full-stack development", "3D web experiences", "AI/ML"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            projects: vec![
                Project { name: s("Safe Space"), summary: s("stress management and detection platform") },
                Project { name: s("Revoice"), summary: s("voice cloning with ASL integration") },
                Project { name: s("FinTech"), summary: s("financial tracking app") },
                Project { name: s("Digi-Doc"), summary: s("healthcare portal for doctors and patients") },
                Project { name: s("LearnOSphere"), summary: s("educational games for kids") },
                Project { name: s("Sahayak"), summary: s("NGO platform for orphan welfare") },
            ],
            education: s("CS undergraduate at TIET Patiala, 5th semester"),
            achievements: vec![s("7+ hackathons"), s("2 IEEE papers"), s("10+ projects"), s("200+ LeetCode problems solved")],
            socials: vec![
                SocialLink { platform: s("LinkedIn"), url: s("https://www.linkedin.com/in/haryiank-kumra-09374b202/") },
                SocialLink { platform: s("GitHub"), url: s("https://github.com/HaryiankKumra") },
                SocialLink { platform: s("Twitter/X"), url: s("https://x.com/KumraHaryiank") },
                SocialLink { platform: s("Instagram"), url: s("https://www.instagram.com/haryiank") },
            ],
            leetcode: Some(s("haryiank")),
        }
    }
}
