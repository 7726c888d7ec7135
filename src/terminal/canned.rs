use super::commands::COMMANDS;
use super::Fragment;
use crate::content::links::{
    display_url, EMAIL, FIVERR_URL, GITHUB_URL, LINKEDIN_URL, LOCATION, MAILTO_URL, OWNER_HEADLINE, OWNER_NAME,
    PHONE_DISPLAY, PHONE_URL, WEBSITE_URL, WHATSAPP_URL,
};
use crate::navigation::SECTIONS;

pub const WELCOME: &str = "Welcome to the mining console. Type 'help' to see what it can do.";
pub const CLEARED: &str = "Terminal cleared. Type 'help' for commands.";
pub const HELP_TIP: &str = "Tip: use TAB for autocomplete and ↑/↓ for history";
pub const MINERALS: [&str; 5] = ["💎 Diamond", "🪙 Gold", "🔷 Copper", "⚫ Coal", "🔶 Iron"];
pub const MINING_FINDS: usize = 5;
pub const MINING_INTERVAL_MS: u32 = 500;
pub const CV_CONFIRM_DELAY_MS: u32 = 1_000;
pub const GOTO_CLOSE_DELAY_MS: u32 = 500;

fn heading(text: &str) -> Fragment {
    Fragment::Heading(text.to_string())
}

fn text(text: &str) -> Fragment {
    Fragment::Text(text.to_string())
}

fn item(text: &str) -> Fragment {
    Fragment::Item(text.to_string())
}

fn link(prefix: &str, label: &str, href: &str) -> Fragment {
    Fragment::Link {
        prefix: prefix.to_string(),
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn web_link(prefix: &str, href: &str) -> Fragment {
    link(prefix, display_url(href), href)
}

fn meter(name: &str, level: u8) -> Fragment {
    Fragment::Meter {
        name: name.to_string(),
        level,
    }
}

pub fn help() -> Vec<Fragment> {
    vec![
        heading("Available Commands:"),
        Fragment::Commands(
            COMMANDS
                .iter()
                .map(|command| (command.name, command.description))
                .collect(),
        ),
        Fragment::Tip(HELP_TIP.to_string()),
    ]
}

pub fn about() -> Vec<Fragment> {
    vec![
        heading(&format!("👨‍💻 {OWNER_NAME}")),
        text(OWNER_HEADLINE),
        Fragment::Gap,
        text("🎓 Education:"),
        item("MSc Software Engineering - UNMSM (1st place)"),
        item("Mining Engineering - UNSCH"),
        item("Microsoft Office Specialist Expert"),
        Fragment::Gap,
        text("🚀 Specializations:"),
        item("Machine Learning for Mining Operations"),
        item("Mining Software Development"),
        item("Process Automation & Optimization"),
        item("Data Science & Analytics"),
        Fragment::Gap,
        text(&format!("📍 Location: {LOCATION}")),
        web_link("🌐 Website: ", WEBSITE_URL),
    ]
}

pub fn skills() -> Vec<Fragment> {
    vec![
        heading("🛠️ Technical Skills"),
        Fragment::Gap,
        text("Mining Software:"),
        meter("VentSim", 90),
        meter("Rocscience", 85),
        meter("Civil 3D", 88),
        Fragment::Gap,
        text("Programming:"),
        meter("Python", 95),
        meter("C# / .NET", 85),
        meter("SQL", 90),
        Fragment::Gap,
        text("Data Science & ML:"),
        meter("TensorFlow", 85),
        meter("Power BI", 90),
    ]
}

pub fn experience() -> Vec<Fragment> {
    vec![
        heading("💼 Professional Experience"),
        Fragment::Gap,
        text("[2024-2025] Project Leader - MTC Highway Software"),
        item("Led development of software for massive plan creation"),
        item("Implemented ML for geological risk detection"),
        item("Achieved 700+ plans generation in minutes"),
        Fragment::Gap,
        text("[2024-Present] Instructor - Mining 4.0 (INARQ)"),
        item("Teaching Python applied to mining"),
        item("Machine Learning implementation in operations"),
        Fragment::Gap,
        text("[2023-2024] Project Manager & AI Strategy - EDT Consulting"),
        item("Led operations team and ML projects"),
        item("Trained 15 data analysts"),
    ]
}

pub fn projects() -> Vec<Fragment> {
    vec![
        heading("🚀 Featured Projects"),
        Fragment::Gap,
        text("1. Massive Plan Creation Software"),
        text("   Tech: Python, C#, Machine Learning, Selenium"),
        text("   → 700+ technical drawings in minutes with ML risk analysis"),
        Fragment::Gap,
        text("2. ML for Mining Support Selection"),
        text("   Tech: TensorFlow, Python, Scikit-learn"),
        text("   → Predictive model for optimal support selection"),
        Fragment::Gap,
        text("3. Mining Ventilation System"),
        text("   Tech: Python, VentSim, Excel Integration"),
        text("   → Air coverage calculation per DS 023-2017 EM"),
        Fragment::Gap,
        web_link("GitHub: ", GITHUB_URL),
    ]
}

pub fn education() -> Vec<Fragment> {
    vec![
        heading("🎓 Education & Certifications"),
        Fragment::Gap,
        text("📚 Formal Education:"),
        item("Master's in Software Engineering - UNMSM (1st place admission)"),
        item("Mining Engineering - UNSCH"),
        item("Technical Computing - CESDE Institute"),
        Fragment::Gap,
        text("🏆 Certifications:"),
        item("Microsoft Office Specialist Expert (2016, 2019/365)"),
        item("Python for Mining - ISE-LATAM (2024)"),
        item("Machine Learning Specialization - MINSUP (2024)"),
        item("Mining 4.0 & AI Implementation - INARQ (2024)"),
        item("Scrum & JIRA Official - InnovAccion (2025)"),
    ]
}

pub fn contact() -> Vec<Fragment> {
    vec![
        heading("📬 Contact Information"),
        Fragment::Gap,
        link("📧 Email: ", EMAIL, MAILTO_URL),
        link("📱 Phone: ", PHONE_DISPLAY, PHONE_URL),
        web_link("💼 LinkedIn: ", LINKEDIN_URL),
        web_link("🐙 GitHub: ", GITHUB_URL),
        link("💬 WhatsApp: ", PHONE_DISPLAY, WHATSAPP_URL),
        web_link("🌐 Website: ", WEBSITE_URL),
        text(&format!("📍 Location: {LOCATION}")),
    ]
}

pub fn social() -> Vec<Fragment> {
    vec![
        heading("🌐 Social Media & Platforms"),
        Fragment::Gap,
        text("Professional:"),
        web_link("• LinkedIn: ", LINKEDIN_URL),
        web_link("• GitHub: ", GITHUB_URL),
        web_link("• Fiverr: ", FIVERR_URL),
        Fragment::Gap,
        text("Contact:"),
        link("• WhatsApp: ", PHONE_DISPLAY, WHATSAPP_URL),
        link("• Email: ", EMAIL, MAILTO_URL),
    ]
}

pub fn sections_hint() -> String {
    format!("Available sections: {}", SECTIONS.join(", "))
}

pub const MATRIX_QUIP: &str = "🎬 Matrix rain activated! (Just kidding, but that would be cool)";
pub const MATRIX_BITS: &str = "01001101 01101001 01101110 01101001 01101110 01100111";
