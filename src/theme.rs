pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// State of the navbar button that switches away from `self`.
    pub fn toggle_button(self) -> ToggleButton {
        let (icon, pressed) = match self {
            Self::Light => ("☀", false),
            Self::Dark => ("☾", true),
        };

        ToggleButton {
            label: format!("Switch to {} theme", self.toggled().as_str()),
            pressed,
            icon,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                particle: "#b87333",
                highlight: "#f59e0b",
                link_rgb: (184, 115, 51),
                link_alpha: 0.15,
            },
            Self::Light => Palette {
                particle: "#d4915c",
                highlight: "#f59e0b",
                link_rgb: (212, 145, 92),
                link_alpha: 0.1,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: String,
    pub pressed: bool,
    pub icon: &'static str,
}

/// Canvas colors for the particle background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub particle: &'static str,
    pub highlight: &'static str,
    pub link_rgb: (u8, u8, u8),
    pub link_alpha: f64,
}

impl Palette {
    pub fn link_color(&self, opacity: f64) -> String {
        let (r, g, b) = self.link_rgb;
        format!("rgba({r}, {g}, {b}, {:.3})", opacity.clamp(0.0, 1.0) * self.link_alpha)
    }
}

/// Where the theme token is stored and where it is shown.
pub trait ThemeHost {
    fn stored_theme(&self) -> Option<String>;
    fn store_theme(&mut self, token: &str);
    fn apply_theme(&mut self, theme: Theme);
    fn system_prefers_light(&self) -> bool {
        false
    }
}

/// A valid stored token wins; otherwise the system preference picks the default.
pub fn resolve_theme(host: &impl ThemeHost) -> Theme {
    host.stored_theme()
        .as_deref()
        .and_then(Theme::from_token)
        .unwrap_or_else(|| {
            if host.system_prefers_light() {
                Theme::Light
            } else {
                Theme::Dark
            }
        })
}

pub fn toggle_theme(host: &mut impl ThemeHost, current: Theme) -> Theme {
    let next = current.toggled();
    host.store_theme(next.as_str());
    host.apply_theme(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryHost {
        stored: Option<String>,
        attribute: Option<&'static str>,
        prefers_light: bool,
    }

    impl ThemeHost for MemoryHost {
        fn stored_theme(&self) -> Option<String> {
            self.stored.clone()
        }

        fn store_theme(&mut self, token: &str) {
            self.stored = Some(token.to_string());
        }

        fn apply_theme(&mut self, theme: Theme) {
            self.attribute = Some(theme.as_str());
        }

        fn system_prefers_light(&self) -> bool {
            self.prefers_light
        }
    }

    #[test]
    fn stored_token_wins_over_default() {
        let host = MemoryHost {
            stored: Some("light".to_string()),
            ..MemoryHost::default()
        };
        assert_eq!(resolve_theme(&host), Theme::Light);
    }

    #[test]
    fn invalid_stored_token_is_ignored() {
        let host = MemoryHost {
            stored: Some("sepia".to_string()),
            ..MemoryHost::default()
        };
        assert_eq!(resolve_theme(&host), Theme::Dark);

        let host = MemoryHost {
            stored: Some("sepia".to_string()),
            prefers_light: true,
            ..MemoryHost::default()
        };
        assert_eq!(resolve_theme(&host), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_persisted_value() {
        let mut host = MemoryHost {
            stored: Some("dark".to_string()),
            ..MemoryHost::default()
        };
        let original = resolve_theme(&host);

        let once = toggle_theme(&mut host, original);
        assert_eq!(host.stored.as_deref(), Some("light"));
        assert_eq!(host.attribute, host.stored.as_deref());

        let twice = toggle_theme(&mut host, once);
        assert_eq!(twice, original);
        assert_eq!(host.stored.as_deref(), Some("dark"));
        assert_eq!(host.attribute, host.stored.as_deref());
    }

    #[test]
    fn toggle_button_names_the_other_theme() {
        let dark = Theme::Dark.toggle_button();
        assert_eq!(dark.label, "Switch to light theme");
        assert!(dark.pressed);

        let light = Theme::Light.toggle_button();
        assert_eq!(light.label, "Switch to dark theme");
        assert!(!light.pressed);
        assert_ne!(light.icon, dark.icon);
    }

    #[test]
    fn link_color_scales_alpha() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.link_color(1.0), "rgba(184, 115, 51, 0.150)");
        assert_eq!(palette.link_color(0.0), "rgba(184, 115, 51, 0.000)");
    }
}
