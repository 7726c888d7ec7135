pub const OWNER_NAME: &str = "Miqueas Quintanilla Ventura";
pub const OWNER_HEADLINE: &str = "Mining Engineer | Data Scientist | Software Developer";
pub const LOCATION: &str = "Ayacucho, Peru (GMT-5)";

pub const EMAIL: &str = "miqueasq@gmail.com";
pub const MAILTO_URL: &str = "mailto:miqueasq@gmail.com";
pub const PHONE_DISPLAY: &str = "+51 955 336 170";
pub const PHONE_URL: &str = "tel:+51955336170";
pub const GITHUB_URL: &str = "https://github.com/Miqueas7";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/mqv";
pub const WHATSAPP_URL: &str = "https://wa.me/51955336170";
pub const FIVERR_URL: &str = "https://es.fiverr.com/miqueas7";
pub const WEBSITE_URL: &str = "https://miqueas.dev";

pub const CV_PATH: &str = "assets/docs/CV_Miqueas_Quintanilla.pdf";
pub const CV_FILE_NAME: &str = "CV_Miqueas_Quintanilla.pdf";

/// Strips the scheme so links read naturally in running text.
pub fn display_url(url: &str) -> &str {
    url.split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .trim_start_matches("www.")
        .trim_start_matches("es.")
}

/// Subject and body of a contact form message, before URL encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn compose(name: &str, reply_to: &str, message: &str) -> Self {
        let subject = if name.trim().is_empty() {
            "Portfolio contact".to_string()
        } else {
            format!("Portfolio contact from {}", name.trim())
        };
        let mut body = message.trim().to_string();
        if !reply_to.trim().is_empty() {
            body.push_str("\n\nReply to: ");
            body.push_str(reply_to.trim());
        }

        Self { subject, body }
    }

    /// `mailto:` URL for the draft; `encode` escapes one query component.
    pub fn to_url(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "{MAILTO_URL}?subject={}&body={}",
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_url_drops_scheme_and_prefixes() {
        assert_eq!(display_url(GITHUB_URL), "github.com/Miqueas7");
        assert_eq!(display_url(FIVERR_URL), "fiverr.com/miqueas7");
        assert_eq!(display_url("plain"), "plain");
    }

    #[test]
    fn draft_carries_name_and_reply_address() {
        let draft = MailDraft::compose(" Ana ", "ana@example.com", "Hola & bye\n");

        assert_eq!(draft.subject, "Portfolio contact from Ana");
        assert_eq!(draft.body, "Hola & bye\n\nReply to: ana@example.com");
    }

    #[test]
    fn draft_without_name_uses_generic_subject() {
        let draft = MailDraft::compose("  ", "", "hi");

        assert_eq!(draft.subject, "Portfolio contact");
        assert_eq!(draft.body, "hi");
    }

    #[test]
    fn url_encodes_each_component_separately() {
        let draft = MailDraft::compose("", "", "Hi (team)!");
        let url = draft.to_url(|value| format!("<{value}>"));

        assert_eq!(url, "mailto:miqueasq@gmail.com?subject=<Portfolio contact>&body=<Hi (team)!>");
    }
}
