use crate::content::links::{GITHUB_URL, LINKEDIN_URL, MAILTO_URL, WHATSAPP_URL};

/// Page-wide keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTerminal,
    CloseOverlays,
    Open(&'static str),
}

/// Maps a keydown (`KeyboardEvent.key` plus modifiers) to a shortcut.
pub fn shortcut_for(key: &str, ctrl: bool, alt: bool) -> Option<Shortcut> {
    if ctrl && key == "`" {
        return Some(Shortcut::ToggleTerminal);
    }

    if key == "Escape" {
        return Some(Shortcut::CloseOverlays);
    }

    if !alt || ctrl {
        return None;
    }

    let url = match key.to_ascii_lowercase().as_str() {
        "g" => GITHUB_URL,
        "l" => LINKEDIN_URL,
        "w" => WHATSAPP_URL,
        "m" => MAILTO_URL,
        _ => return None,
    };

    Some(Shortcut::Open(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_backtick_toggles_terminal() {
        assert_eq!(shortcut_for("`", true, false), Some(Shortcut::ToggleTerminal));
        assert_eq!(shortcut_for("`", false, false), None);
    }

    #[test]
    fn escape_closes_regardless_of_modifiers() {
        assert_eq!(shortcut_for("Escape", false, false), Some(Shortcut::CloseOverlays));
        assert_eq!(shortcut_for("Escape", true, true), Some(Shortcut::CloseOverlays));
    }

    #[test]
    fn alt_letters_open_profiles() {
        assert_eq!(shortcut_for("g", false, true), Some(Shortcut::Open(GITHUB_URL)));
        assert_eq!(shortcut_for("L", false, true), Some(Shortcut::Open(LINKEDIN_URL)));
        assert_eq!(shortcut_for("w", false, true), Some(Shortcut::Open(WHATSAPP_URL)));
        assert_eq!(shortcut_for("m", false, true), Some(Shortcut::Open(MAILTO_URL)));
    }

    #[test]
    fn plain_letters_are_ignored() {
        assert_eq!(shortcut_for("g", false, false), None);
        assert_eq!(shortcut_for("g", true, true), None);
        assert_eq!(shortcut_for("x", false, true), None);
    }
}
