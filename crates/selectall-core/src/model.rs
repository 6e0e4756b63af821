//! Core data model types for selectall.
//!
//! Items shown in the quiz are either documented HTML elements (the ground
//! truth) or decoys. The two shapes are distinct enum variants so every
//! consumer has to handle both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Pick the locale from a routed path: exactly `/en` is English, every
    /// other path is Japanese.
    pub fn from_route_path(path: &str) -> Self {
        if path == "/en" {
            Locale::En
        } else {
            Locale::Ja
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = QuizError;

    /// Accepts a locale name or a routed path such as `/en`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            return Ok(Locale::from_route_path(s));
        }
        match s.to_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Locale::Ja),
            "en" | "en-us" | "english" => Ok(Locale::En),
            other => Err(QuizError::UnknownLocale(other.to_string())),
        }
    }
}

/// A string carried in both supported locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ja: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }

    /// The string for `locale`.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.ja,
            Locale::En => &self.en,
        }
    }
}

/// A real HTML element together with its reference material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedItem {
    /// Element name (e.g. "abbr").
    pub name: String,
    /// Link into the HTML Living Standard.
    #[serde(rename = "specification")]
    pub specification_url: String,
    /// One-line summary of what the element represents.
    pub description: LocalizedText,
    /// Link to the MDN reference page, per locale.
    #[serde(rename = "reference")]
    pub reference_url: LocalizedText,
}

/// One entry of the quiz list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    /// A plausible name that is not an HTML element.
    Decoy { name: String },
    /// A real element.
    Documented(DocumentedItem),
}

impl Item {
    pub fn decoy(name: impl Into<String>) -> Self {
        Item::Decoy { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Decoy { name } => name,
            Item::Documented(item) => &item.name,
        }
    }

    /// Returns `true` for items from the ground-truth list.
    pub fn is_real(&self) -> bool {
        match self {
            Item::Decoy { .. } => false,
            Item::Documented(_) => true,
        }
    }
}

impl From<DocumentedItem> for Item {
    fn from(item: DocumentedItem) -> Self {
        Item::Documented(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbr() -> DocumentedItem {
        DocumentedItem {
            name: "abbr".into(),
            description: LocalizedText::new("略語", "Abbreviation"),
            specification_url: "https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-abbr-element".into(),
            reference_url: LocalizedText::new(
                "https://developer.mozilla.org/ja/docs/Web/HTML/Element/abbr",
                "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/abbr",
            ),
        }
    }

    #[test]
    fn locale_display_and_parse() {
        assert_eq!(Locale::Ja.to_string(), "ja");
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("japanese".parse::<Locale>().unwrap(), Locale::Ja);
        assert_eq!(
            "fr".parse::<Locale>().unwrap_err(),
            QuizError::UnknownLocale("fr".into())
        );
    }

    #[test]
    fn locale_from_route_path() {
        assert_eq!(Locale::from_route_path("/en"), Locale::En);
        assert_eq!(Locale::from_route_path("/en/"), Locale::Ja);
        assert_eq!(Locale::from_route_path("/"), Locale::Ja);
        assert_eq!(Locale::from_route_path("/english"), Locale::Ja);
    }

    #[test]
    fn locale_parses_route_paths() {
        assert_eq!("/en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("/".parse::<Locale>().unwrap(), Locale::Ja);
        assert_eq!("/fr".parse::<Locale>().unwrap(), Locale::Ja);
    }

    #[test]
    fn localized_text_picks_locale() {
        let item = abbr();
        assert_eq!(item.description.get(Locale::Ja), "略語");
        assert_eq!(item.description.get(Locale::En), "Abbreviation");
        assert!(item.reference_url.get(Locale::En).contains("en-US"));
    }

    #[test]
    fn item_name_and_kind() {
        let real = Item::from(abbr());
        let decoy = Item::decoy("blink");
        assert_eq!(real.name(), "abbr");
        assert_eq!(decoy.name(), "blink");
        assert!(real.is_real());
        assert!(!decoy.is_real());
    }

    #[test]
    fn item_serde_tagging() {
        let json = serde_json::to_string(&Item::decoy("blink")).unwrap();
        assert_eq!(json, r#"{"kind":"decoy","name":"blink"}"#);

        let real = Item::from(abbr());
        let json = serde_json::to_value(&real).unwrap();
        assert_eq!(json["kind"], "documented");
        assert_eq!(json["name"], "abbr");
        assert!(json["specification"].as_str().unwrap().contains("abbr"));
    }
}
