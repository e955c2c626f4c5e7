//! Preference set model, its storage wire shape, and the style bindings it drives.
//!
//! # Design
//! - Fields stay private; `set` routes an option to the field of its own category.
//! - Serialization goes through a wire struct and resolves every option back into the catalog.
//! - Style output is a pure function of the set.

use crate::core::catalog::{ArticleOption, Category};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One option per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredPreferences", into = "StoredPreferences")]
pub struct PreferenceSet {
    font_family: ArticleOption,
    font_size: ArticleOption,
    font_color: ArticleOption,
    background_color: ArticleOption,
    content_width: ArticleOption,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl PreferenceSet {
    /// Catalog defaults for every category.
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            font_family: Category::FontFamily.default_option(),
            font_size: Category::FontSize.default_option(),
            font_color: Category::FontColor.default_option(),
            background_color: Category::BackgroundColor.default_option(),
            content_width: Category::ContentWidth.default_option(),
        }
    }

    /// Option currently held for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> ArticleOption {
        match category {
            Category::FontFamily => self.font_family,
            Category::FontSize => self.font_size,
            Category::FontColor => self.font_color,
            Category::BackgroundColor => self.background_color,
            Category::ContentWidth => self.content_width,
        }
    }

    /// Replace the field matching the option's category, leaving the rest untouched.
    pub fn set(&mut self, option: ArticleOption) {
        let slot = match option.category() {
            Category::FontFamily => &mut self.font_family,
            Category::FontSize => &mut self.font_size,
            Category::FontColor => &mut self.font_color,
            Category::BackgroundColor => &mut self.background_color,
            Category::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    /// Copy of the set with one option replaced.
    #[must_use]
    pub fn with(mut self, option: ArticleOption) -> Self {
        self.set(option);
        self
    }

    /// Font family option.
    #[must_use]
    pub const fn font_family(&self) -> ArticleOption {
        self.font_family
    }

    /// Font size option.
    #[must_use]
    pub const fn font_size(&self) -> ArticleOption {
        self.font_size
    }

    /// Font color option.
    #[must_use]
    pub const fn font_color(&self) -> ArticleOption {
        self.font_color
    }

    /// Background color option.
    #[must_use]
    pub const fn background_color(&self) -> ArticleOption {
        self.background_color
    }

    /// Content width option.
    #[must_use]
    pub const fn content_width(&self) -> ArticleOption {
        self.content_width
    }

    /// CSS custom properties (name, value) in category order.
    #[must_use]
    pub fn style_variables(&self) -> [(&'static str, &'static str); 5] {
        Category::ALL.map(|category| (category.css_variable(), self.get(category).value()))
    }

    /// Inline `style` attribute value for the content root.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        for (name, value) in self.style_variables() {
            style.push_str(name);
            style.push_str(": ");
            style.push_str(value);
            style.push(';');
        }
        style
    }
}

/// A stored option could not be matched against the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog option in the category has the stored value.
    #[error("no {category} option has value {value:?}")]
    UnknownValue {
        /// Category being decoded.
        category: Category,
        /// Value found in storage.
        value: String,
    },
    /// The value matched but its label or class name differs from the catalog.
    #[error("stored {category} option {value:?} does not match the catalog entry")]
    Mismatch {
        /// Category being decoded.
        category: Category,
        /// Value found in storage.
        value: String,
    },
}

/// Serialized form of a single option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredOption {
    #[serde(rename = "title", alias = "name")]
    name: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
}

impl StoredOption {
    fn resolve(self, category: Category) -> Result<ArticleOption, CatalogError> {
        let option = category
            .find(&self.value)
            .ok_or_else(|| CatalogError::UnknownValue {
                category,
                value: self.value.clone(),
            })?;
        if option.name() != self.name || option.class_name() != self.class_name.as_deref() {
            return Err(CatalogError::Mismatch {
                category,
                value: self.value,
            });
        }
        Ok(option)
    }
}

impl From<ArticleOption> for StoredOption {
    fn from(option: ArticleOption) -> Self {
        Self {
            name: option.name().to_string(),
            value: option.value().to_string(),
            class_name: option.class_name().map(ToString::to_string),
        }
    }
}

/// Storage shape, keyed the way earlier releases of the reader wrote it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(rename = "fontFamilyOption")]
    font_family: StoredOption,
    #[serde(rename = "fontSizeOption")]
    font_size: StoredOption,
    #[serde(rename = "fontColor")]
    font_color: StoredOption,
    #[serde(rename = "backgroundColor")]
    background_color: StoredOption,
    #[serde(rename = "contentWidth")]
    content_width: StoredOption,
}

impl TryFrom<StoredPreferences> for PreferenceSet {
    type Error = CatalogError;

    fn try_from(stored: StoredPreferences) -> Result<Self, Self::Error> {
        Ok(Self {
            font_family: stored.font_family.resolve(Category::FontFamily)?,
            font_size: stored.font_size.resolve(Category::FontSize)?,
            font_color: stored.font_color.resolve(Category::FontColor)?,
            background_color: stored.background_color.resolve(Category::BackgroundColor)?,
            content_width: stored.content_width.resolve(Category::ContentWidth)?,
        })
    }
}

impl From<PreferenceSet> for StoredPreferences {
    fn from(set: PreferenceSet) -> Self {
        Self {
            font_family: set.font_family.into(),
            font_size: set.font_size.into(),
            font_color: set.font_color.into(),
            background_color: set.background_color.into(),
            content_width: set.content_width.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PreferenceSet;
    use crate::core::catalog::Category;
    use serde_json::json;

    #[test]
    fn set_only_touches_the_option_category() {
        for category in Category::ALL {
            for option in category.options() {
                let mut set = PreferenceSet::defaults();
                set.set(*option);
                assert_eq!(set.get(category), *option);
                for other in Category::ALL.into_iter().filter(|c| *c != category) {
                    assert_eq!(set.get(other), other.default_option());
                }
            }
        }
    }

    #[test]
    fn inline_style_binds_every_variable() {
        let size = Category::FontSize.find("24px").expect("catalog size");
        let style = PreferenceSet::defaults().with(size).inline_style();
        assert_eq!(
            style,
            "--font-family: 'Open Sans', sans-serif;--font-size: 24px;--font-color: #000000;\
             --bg-color: #FFFFFF;--container-width: 1394px;"
        );
    }

    #[test]
    fn serializes_with_legacy_keys() {
        let value = serde_json::to_value(PreferenceSet::defaults()).expect("encode");
        assert_eq!(
            value["fontSizeOption"],
            json!({ "title": "18px", "value": "18px", "className": "font-size-18" })
        );
        assert_eq!(value["contentWidth"]["value"], "1394px");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(5));
    }

    #[test]
    fn every_catalog_option_survives_storage() {
        for category in Category::ALL {
            for option in category.options() {
                let set = PreferenceSet::defaults().with(*option);
                let raw = serde_json::to_string(&set).expect("encode");
                let decoded: PreferenceSet = serde_json::from_str(&raw).expect("decode");
                assert_eq!(decoded, set);
            }
        }
    }

    #[test]
    fn decoding_rejects_values_outside_the_catalog() {
        let mut value = serde_json::to_value(PreferenceSet::defaults()).expect("encode");
        value["fontSizeOption"]["value"] = json!("20px");
        assert!(serde_json::from_value::<PreferenceSet>(value).is_err());
    }

    #[test]
    fn decoding_rejects_options_from_another_category() {
        let mut value = serde_json::to_value(PreferenceSet::defaults()).expect("encode");
        value["fontColor"] = value["backgroundColor"].clone();
        assert!(serde_json::from_value::<PreferenceSet>(value).is_err());
    }

    #[test]
    fn decoding_accepts_name_alias_for_title() {
        let mut value = serde_json::to_value(PreferenceSet::defaults()).expect("encode");
        value["contentWidth"] = json!({ "name": "Narrow", "value": "948px", "className": "width-narrow" });
        let decoded: PreferenceSet = serde_json::from_value(value).expect("decode");
        assert_eq!(decoded.content_width().name(), "Narrow");
    }
}
