//! Fixed option catalog for every article preference category.
//!
//! # Design
//! - Options are only constructed here, so every option value in the program is a catalog member.
//! - Each list is ordered; the first entry is the category default.
//! - Options carry their category, which lets callers route them without a separate key.

use std::fmt;

/// Preference categories exposed by the settings panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Typeface used for article text.
    FontFamily,
    /// Base font size.
    FontSize,
    /// Text color.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Maximum width of the article column.
    ContentWidth,
}

impl Category {
    /// All categories in panel display order.
    pub const ALL: [Self; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// Ordered options available for the category.
    #[must_use]
    pub const fn options(self) -> &'static [ArticleOption] {
        match self {
            Self::FontFamily => FONT_FAMILIES,
            Self::FontSize => FONT_SIZES,
            Self::FontColor => FONT_COLORS,
            Self::BackgroundColor => BACKGROUND_COLORS,
            Self::ContentWidth => CONTENT_WIDTHS,
        }
    }

    /// Designated default (first catalog entry).
    #[must_use]
    pub const fn default_option(self) -> ArticleOption {
        self.options()[0]
    }

    /// Look up a catalog option by its CSS value.
    #[must_use]
    pub fn find(self, value: &str) -> Option<ArticleOption> {
        self.options()
            .iter()
            .copied()
            .find(|option| option.value == value)
    }

    /// Index of `option` within this category's list; `None` for foreign options.
    #[must_use]
    pub fn position(self, option: ArticleOption) -> Option<usize> {
        self.options().iter().position(|candidate| *candidate == option)
    }

    /// Stable identifier used for translation keys and form control names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    /// CSS custom property the content view binds the option value to.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One selectable value (display label + CSS token) within a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArticleOption {
    category: Category,
    name: &'static str,
    value: &'static str,
    class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn new(
        category: Category,
        name: &'static str,
        value: &'static str,
        class_name: &'static str,
    ) -> Self {
        Self {
            category,
            name,
            value,
            class_name: Some(class_name),
        }
    }

    /// Category this option belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }

    /// Canonical display label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// CSS-usable token.
    #[must_use]
    pub const fn value(self) -> &'static str {
        self.value
    }

    /// Optional class name used for styling the option itself.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        self.class_name
    }

    /// Whether this is the designated default of its category.
    #[must_use]
    pub fn is_default(self) -> bool {
        self == self.category.default_option()
    }
}

use Category::{BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize};

/// Font family options.
pub const FONT_FAMILIES: &[ArticleOption] = &[
    ArticleOption::new(FontFamily, "Open Sans", "'Open Sans', sans-serif", "open-sans"),
    ArticleOption::new(FontFamily, "Ubuntu", "'Ubuntu', sans-serif", "ubuntu"),
    ArticleOption::new(
        FontFamily,
        "Cormorant Garamond",
        "'Cormorant Garamond', serif",
        "cormorant-garamond",
    ),
    ArticleOption::new(FontFamily, "Days One", "'Days One', sans-serif", "days-one"),
    ArticleOption::new(FontFamily, "Merriweather", "'Merriweather', serif", "merriweather"),
];

/// Font size options.
pub const FONT_SIZES: &[ArticleOption] = &[
    ArticleOption::new(FontSize, "18px", "18px", "font-size-18"),
    ArticleOption::new(FontSize, "24px", "24px", "font-size-24"),
    ArticleOption::new(FontSize, "38px", "38px", "font-size-38"),
];

/// Font color options.
pub const FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new(FontColor, "Black", "#000000", "font-black"),
    ArticleOption::new(FontColor, "White", "#FFFFFF", "font-white"),
    ArticleOption::new(FontColor, "Gray", "#C4C4C4", "font-gray"),
    ArticleOption::new(FontColor, "Pink", "#FEAFE8", "font-pink"),
    ArticleOption::new(FontColor, "Hot pink", "#FD24AF", "font-hot-pink"),
    ArticleOption::new(FontColor, "Yellow", "#FFC802", "font-yellow"),
    ArticleOption::new(FontColor, "Green", "#80D994", "font-green"),
    ArticleOption::new(FontColor, "Blue", "#6FC1FD", "font-blue"),
    ArticleOption::new(FontColor, "Purple", "#5F1694", "font-purple"),
];

/// Background color options.
pub const BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new(BackgroundColor, "White", "#FFFFFF", "bg-white"),
    ArticleOption::new(BackgroundColor, "Black", "#000000", "bg-black"),
    ArticleOption::new(BackgroundColor, "Gray", "#C4C4C4", "bg-gray"),
    ArticleOption::new(BackgroundColor, "Pink", "#FEAFE8", "bg-pink"),
    ArticleOption::new(BackgroundColor, "Hot pink", "#FD24AF", "bg-hot-pink"),
    ArticleOption::new(BackgroundColor, "Yellow", "#FFC802", "bg-yellow"),
    ArticleOption::new(BackgroundColor, "Green", "#80D994", "bg-green"),
    ArticleOption::new(BackgroundColor, "Blue", "#6FC1FD", "bg-blue"),
    ArticleOption::new(BackgroundColor, "Purple", "#5F1694", "bg-purple"),
];

/// Content width options.
pub const CONTENT_WIDTHS: &[ArticleOption] = &[
    ArticleOption::new(ContentWidth, "Wide", "1394px", "width-wide"),
    ArticleOption::new(ContentWidth, "Narrow", "948px", "width-narrow"),
];
