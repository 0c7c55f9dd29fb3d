use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class put on the page root.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::Light.class(), "light");
    }

    #[test]
    fn test_storage_format() {
        let s = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(s, "\"Light\"");
        assert_eq!(serde_json::from_str::<Theme>(&s).unwrap(), Theme::Light);
    }

    #[test]
    fn test_palette_classes_defined() {
        let css = include_str!("../input.css");
        for class in ["bg-navy", "bg-teal", "text-teal", "border-teal"] {
            assert!(css.contains(&format!(".{class} {{")), "missing .{class}");
        }
        for theme in [Theme::Dark, Theme::Light] {
            for class in ["text-muted", "field"] {
                let rule = format!(".{} .{class} {{", theme.class());
                assert!(css.contains(&rule), "missing {rule}");
            }
        }
    }
}
