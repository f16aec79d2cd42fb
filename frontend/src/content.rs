use serde::Deserialize;
use thiserror::Error;

use crate::reveal::stagger::{StaggerParams, MAX_TIMER_DELAY_MS};
use crate::reveal::{RevealConfig, DEFAULT_STAGGER_MS};

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio content is missing {0}")]
    Missing(&'static str),
    #[error("portfolio content has an invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    pub links: SocialLinks,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub certificates: CertificatesContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub email: String,
    pub location: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
}

/// Small caps eyebrow label above a section title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionHeading {
    pub label: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub reveal: RevealConfig,
    pub heading: SectionHeading,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub reveal: RevealConfig,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub reveal: RevealConfig,
    pub heading: SectionHeading,
    pub bio: String,
    pub education: Vec<Education>,
    pub experience: Experience,
    pub tech_stack: Vec<TechCategory>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub school: String,
    pub program: String,
    pub period: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CertificatesContent {
    #[serde(default)]
    pub reveal: RevealConfig,
    pub heading: SectionHeading,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u32,
    pub items: Vec<Certificate>,
}

fn default_stagger_ms() -> u32 {
    DEFAULT_STAGGER_MS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsContent {
    #[serde(default)]
    pub reveal: RevealConfig,
    pub heading: SectionHeading,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

/// The content bundled into the binary.
pub fn load() -> Result<PortfolioContent, ContentError> {
    parse(PORTFOLIO_JSON)
}

pub fn parse(json: &str) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = serde_json::from_str(json)?;
    if content.owner.name.trim().is_empty() {
        return Err(ContentError::Missing("owner.name"));
    }
    if content.owner.email.trim().is_empty() {
        return Err(ContentError::Missing("owner.email"));
    }
    let stagger = StaggerParams::new(
        content.certificates.items.len(),
        content.certificates.stagger_ms,
    );
    if !stagger.fits_timer() {
        return Err(ContentError::Invalid {
            field: "certificates.stagger_ms",
            reason: format!(
                "{} items {}ms apart run past the {}ms timer limit",
                stagger.item_count, stagger.delay_ms, MAX_TIMER_DELAY_MS
            ),
        });
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = load().unwrap();
        assert_eq!(content.owner.name, "Kim Sumilang");
        assert_eq!(content.certificates.items.len(), 4);
        assert_eq!(content.certificates.stagger_ms, 150);
        assert_eq!(content.projects.items.len(), 3);
        assert_eq!(content.projects.items[2].link, None);
        assert_eq!(content.about.reveal, RevealConfig::at_threshold(0.2));
        assert_eq!(content.projects.reveal, RevealConfig::DEFAULT);
        assert_eq!(content.footer.reveal, RevealConfig::at_threshold(0.5));
    }

    #[test]
    fn bundled_sections_carry_their_headings() {
        let content = load().unwrap();
        let labels = [
            &content.about.heading,
            &content.certificates.heading,
            &content.projects.heading,
            &content.contact.heading,
        ]
        .map(|heading| (heading.label.as_str(), heading.title.as_str()));
        assert_eq!(
            labels,
            [
                ("GET TO KNOW ME", "About Me"),
                ("MY ACHIEVEMENTS", "Certificates & Achievements"),
                ("EXPLORE MY CREATIONS", "Projects"),
                ("GET IN TOUCH", "Contact Me"),
            ]
        );
        assert_eq!(content.footer.cta, "Let's Connect 👋");
    }

    fn with_section(section: &str, value: &str) -> String {
        let mut doc: serde_json::Value = serde_json::from_str(PORTFOLIO_JSON).unwrap();
        doc[section] = serde_json::from_str(value).unwrap();
        doc.to_string()
    }

    #[test]
    fn omitted_reveal_options_fall_back_to_defaults() {
        let json = with_section(
            "certificates",
            r#"{
                "heading": {"label": "l", "title": "t"},
                "items": [{"title": "t", "issuer": "i", "date": "d", "icon": "x"}]
            }"#,
        );
        let content = parse(&json).unwrap();
        assert_eq!(content.certificates.reveal, RevealConfig::DEFAULT);
        assert_eq!(content.certificates.stagger_ms, DEFAULT_STAGGER_MS);

        let json = with_section("contact", r#"{"heading": {"label": "l", "title": "t"}}"#);
        assert_eq!(parse(&json).unwrap().contact.reveal, RevealConfig::DEFAULT);
    }

    #[test]
    fn invalid_reveal_options_are_reported() {
        let json = with_section("footer", r#"{"reveal": {"threshold": 3.0}, "cta": "c"}"#);
        let err = parse(&json).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().contains("threshold"));

        let json = with_section(
            "contact",
            r#"{"reveal": {"root_margin": "10em"}, "heading": {"label": "l", "title": "t"}}"#,
        );
        let err = parse(&json).unwrap_err();
        assert!(err.to_string().contains("10em"));
    }

    #[test]
    fn stagger_past_the_timer_limit_is_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(PORTFOLIO_JSON).unwrap();
        doc["certificates"]["stagger_ms"] = serde_json::json!(3_000_000_000u32);
        let err = parse(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid { field: "certificates.stagger_ms", .. }
        ));

        // 3 gaps of 700_000_000ms is just under the limit
        doc["certificates"]["stagger_ms"] = serde_json::json!(700_000_000u32);
        assert!(parse(&doc.to_string()).is_ok());
        doc["certificates"]["stagger_ms"] = serde_json::json!(800_000_000u32);
        assert!(parse(&doc.to_string()).is_err());
    }

    #[test]
    fn blank_owner_is_rejected() {
        let json = with_section(
            "owner",
            r#"{"name": " ", "role": "r", "email": "e", "location": "l", "photo": "p"}"#,
        );
        assert!(matches!(parse(&json), Err(ContentError::Missing("owner.name"))));
    }
}
