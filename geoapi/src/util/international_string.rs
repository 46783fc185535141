use std::fmt::{Debug, Display};

/// A string that may be translated to several locales.
///
/// The [`Display`] implementation writes the string in the default locale.
pub trait InternationalString: Display + Debug {
    /// Returns the string in the given locale, or in the default locale if `locale` is `None`.
    fn localized(&self, locale: Option<&str>) -> Option<String>;

    /// Number of characters of the string in the default locale.
    fn char_count(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl InternationalString for String {
    fn localized(&self, _locale: Option<&str>) -> Option<String> {
        Some(self.clone())
    }
}

impl InternationalString for &'static str {
    fn localized(&self, _locale: Option<&str>) -> Option<String> {
        Some((*self).to_string())
    }
}
