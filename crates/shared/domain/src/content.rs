//! Shapes of the localized site copy.
//!
//! Both languages instantiate the same struct types from `'static` data, so
//! structural parity between language variants is checked by the compiler:
//! a field present in one language cannot be absent in the other, and a
//! single bundle can never mix languages.

use crate::language::Language;

/// The complete copy set for one language.
#[derive(Debug, Clone, Copy)]
pub struct TranslationBundle {
    pub language: Language,
    pub hero: HeroCopy,
    pub skills: SkillsCopy,
    pub projects: ProjectsCopy,
    pub writing: WritingCopy,
    pub philosophy: PhilosophyCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroCopy {
    pub subtitle: &'static str,
    pub headline1: &'static str,
    pub headline2: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub view_work: &'static str,
    pub scroll: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillsCopy {
    pub label: &'static str,
    pub title: &'static str,
    pub categories: &'static [SkillCategory],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectsCopy {
    pub label: &'static str,
    pub title: &'static str,
    pub items: &'static [ProjectCopy],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// Headings of the writing section. The article list itself comes from the
/// article registry, not from per-language copy, so both languages always
/// show the same set of articles.
#[derive(Debug, Clone, Copy)]
pub struct WritingCopy {
    pub label: &'static str,
    pub title: &'static str,
    /// Link text leading from an article back to the index.
    pub back: &'static str,
    /// Counter label on animated figures, e.g. "Step" in "Step 3/7".
    pub step: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PhilosophyCopy {
    pub label: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterCopy {
    pub copyright: &'static str,
}

/// Interactive figures an article can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleEmbed {
    /// The animated optimization-path diagram.
    DescentChart,
}

/// One long-form article, carrying both language variants side by side.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedArticle {
    /// Stable identifier, also the page path segment.
    pub slug: &'static str,
    /// ISO-8601 publication date; formatted per language at render time.
    pub date: &'static str,
    pub embed: Option<ArticleEmbed>,
    pub en: ArticleText,
    pub de: ArticleText,
}

impl LocalizedArticle {
    /// The text variant for the given language.
    #[must_use]
    pub const fn text(&self, language: Language) -> &ArticleText {
        match language {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArticleText {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub sections: &'static [ArticleSection],
}

#[derive(Debug, Clone, Copy)]
pub struct ArticleSection {
    pub heading: Option<&'static str>,
    pub paragraphs: &'static [&'static str],
}
