//! Theme
//!
//! Light/dark switching through the `data-theme` attribute on `<html>`.

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    /// Follow the system preference
    Auto,
}

impl Theme {
    /// Attribute value, `None` for [`Theme::Auto`]
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => Some("light"),
            Theme::Auto => None,
        }
    }

    /// Theme named by an attribute value; anything unrecognized is auto
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ => Theme::Auto,
        }
    }

    /// Only dark flips to light; light and auto both go dark
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::Auto => Theme::Dark,
        }
    }

    /// Theme after a toggle click, given the current attribute value
    pub fn toggled_from(current: Option<&str>) -> Self {
        Self::from_attribute(current).toggled()
    }

    /// Set or remove the attribute on the document root
    pub fn apply(self) {
        let Some(root) = document_root() else {
            return;
        };

        let result = match self.attribute() {
            Some(value) => root.set_attribute(THEME_ATTRIBUTE, value),
            None => root.remove_attribute(THEME_ATTRIBUTE),
        };
        if let Err(e) = result {
            web_sys::console::error_2(&"Failed to apply theme:".into(), &e);
        }
    }
}

/// Current attribute value on the document root
pub fn current_attribute() -> Option<String> {
    document_root()?.get_attribute(THEME_ATTRIBUTE)
}

/// Flip between dark and light
pub fn toggle_theme() -> Theme {
    let next = Theme::toggled_from(current_attribute().as_deref());
    next.apply();
    next
}

fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_dark() {
        assert_eq!(Theme::toggled_from(Some("dark")), Theme::Light);
    }

    #[test]
    fn test_toggle_from_anything_else() {
        assert_eq!(Theme::toggled_from(Some("light")), Theme::Dark);
        assert_eq!(Theme::toggled_from(None), Theme::Dark);
        assert_eq!(Theme::toggled_from(Some("")), Theme::Dark);
        assert_eq!(Theme::toggled_from(Some("DARK")), Theme::Dark);
    }

    #[test]
    fn test_attribute_values() {
        assert_eq!(Theme::Dark.attribute(), Some("dark"));
        assert_eq!(Theme::Light.attribute(), Some("light"));
        assert_eq!(Theme::Auto.attribute(), None);
    }

    #[test]
    fn test_from_attribute() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(None), Theme::Auto);
        assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Auto);
        assert_eq!(Theme::Auto.toggled(), Theme::Dark);
    }
}
