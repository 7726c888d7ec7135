//! Command console overlay: a line-oriented toy shell over canned text.
//!
//! The engine is host-agnostic. Anything that touches the page (theme,
//! scrolling, downloads, timers) goes through [`TerminalHost`].

mod canned;
pub mod commands;
mod history;

use rand::{rngs::SmallRng, Rng};

use crate::content::links::{CV_FILE_NAME, CV_PATH};
use crate::navigation::is_section;
use crate::theme::Theme;
use commands::{completions, lookup, Action};
use history::History;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Welcome,
    Command,
    Info,
    Success,
    Error,
    Matrix,
}

impl LineKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Welcome => "terminal-welcome",
            Self::Command => "terminal-command",
            Self::Info => "terminal-info",
            Self::Success => "terminal-success",
            Self::Error => "terminal-error",
            Self::Matrix => "terminal-matrix",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    Heading(String),
    Text(String),
    Item(String),
    Gap,
    Link { prefix: String, label: String, href: String },
    Commands(Vec<(&'static str, &'static str)>),
    Meter { name: String, level: u8 },
    Tip(String),
}

/// `████████░░ 80%`, one block per ten points.
pub fn meter_bar(level: u8) -> String {
    let level = level.min(100);
    let filled = usize::from((level + 5) / 10).min(10);
    format!("{}{} {level}%", "█".repeat(filled), "░".repeat(10 - filled))
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputBlock {
    pub kind: LineKind,
    pub fragments: Vec<Fragment>,
}

impl OutputBlock {
    pub fn new(kind: LineKind, fragments: Vec<Fragment>) -> Self {
        Self { kind, fragments }
    }

    pub fn line(kind: LineKind, text: impl Into<String>) -> Self {
        Self::new(kind, vec![Fragment::Text(text.into())])
    }

    /// Plain-text rendering, one line per fragment.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Heading(text) | Fragment::Text(text) | Fragment::Tip(text) => text.clone(),
                Fragment::Item(text) => format!("• {text}"),
                Fragment::Gap => String::new(),
                Fragment::Link { prefix, label, .. } => format!("{prefix}{label}"),
                Fragment::Commands(rows) => rows
                    .iter()
                    .map(|(name, description)| format!("{name:<12}{description}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Fragment::Meter { name, level } => format!("{name:<12}{}", meter_bar(*level)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Work the engine hands back to the page after a delay.
#[derive(Clone, Debug, PartialEq)]
pub enum Deferred {
    Output(OutputBlock),
    Close,
}

pub trait TerminalHost {
    fn toggle_theme(&mut self) -> Theme;
    fn navigate(&mut self, section: &str);
    fn download(&mut self, path: &str, file_name: &str);
    fn schedule(&mut self, delay_ms: u32, deferred: Deferred);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Closed,
    Open,
}

pub struct Terminal {
    mode: Mode,
    greeted: bool,
    input: String,
    history: History,
    output: Vec<OutputBlock>,
    rng: SmallRng,
}

impl Terminal {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            mode: Mode::Closed,
            greeted: false,
            input: String::new(),
            history: History::default(),
            output: Vec::new(),
            rng,
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode == Mode::Open
    }

    pub fn output(&self) -> &[OutputBlock] {
        &self.output
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Opens the console; the first open prints the greeting and help.
    pub fn open(&mut self) {
        self.mode = Mode::Open;

        if !self.greeted {
            self.greeted = true;
            self.push(OutputBlock::line(LineKind::Welcome, canned::WELCOME));
            self.push(OutputBlock::new(LineKind::Info, canned::help()));
        }
    }

    pub fn close(&mut self) {
        self.mode = Mode::Closed;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn push(&mut self, block: OutputBlock) {
        self.output.push(block);
    }

    pub fn apply(&mut self, deferred: Deferred) {
        match deferred {
            Deferred::Output(block) => self.push(block),
            Deferred::Close => self.close(),
        }
    }

    pub fn clear(&mut self) {
        self.output.clear();
        self.push(OutputBlock::line(LineKind::Welcome, canned::CLEARED));
    }

    pub fn history_up(&mut self) {
        if let Some(entry) = self.history.up() {
            self.input = entry.to_string();
        }
    }

    pub fn history_down(&mut self) {
        if let Some(entry) = self.history.down() {
            self.input = entry.to_string();
        }
    }

    pub fn autocomplete(&mut self) {
        let current = self.input.trim().to_ascii_lowercase();
        if current.is_empty() {
            return;
        }

        match completions(&current).as_slice() {
            [] => {}
            [single] => self.input = single.to_string(),
            many => self.push(OutputBlock::line(
                LineKind::Info,
                format!("Suggestions: {}", many.join(", ")),
            )),
        }
    }

    /// Runs whatever is in the input field and clears it.
    pub fn submit(&mut self, host: &mut impl TerminalHost) {
        let line = std::mem::take(&mut self.input);
        self.execute(&line, host);
    }

    pub fn execute(&mut self, line: &str, host: &mut impl TerminalHost) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.history.push(line);
        self.push(OutputBlock::line(LineKind::Command, format!("> {line}")));

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return;
        };
        let args = words.collect::<Vec<_>>().join(" ");

        match lookup(word) {
            Some(command) => {
                log::debug!("terminal command {}", command.name);
                self.run(command.action, &args, host);
            }
            None => self.push(OutputBlock::line(
                LineKind::Error,
                format!("Command not found: {word}. Type 'help' for available commands."),
            )),
        }
    }

    fn run(&mut self, action: Action, args: &str, host: &mut impl TerminalHost) {
        match action {
            Action::Help => self.push(OutputBlock::new(LineKind::Info, canned::help())),
            Action::About => self.push(OutputBlock::new(LineKind::Info, canned::about())),
            Action::Skills => self.push(OutputBlock::new(LineKind::Info, canned::skills())),
            Action::Experience => self.push(OutputBlock::new(LineKind::Info, canned::experience())),
            Action::Projects => self.push(OutputBlock::new(LineKind::Info, canned::projects())),
            Action::Education => self.push(OutputBlock::new(LineKind::Info, canned::education())),
            Action::Contact => self.push(OutputBlock::new(LineKind::Info, canned::contact())),
            Action::Social => self.push(OutputBlock::new(LineKind::Info, canned::social())),
            Action::Cv => {
                self.push(OutputBlock::line(LineKind::Success, "📄 Downloading CV..."));
                host.download(CV_PATH, CV_FILE_NAME);
                host.schedule(
                    canned::CV_CONFIRM_DELAY_MS,
                    Deferred::Output(OutputBlock::line(LineKind::Success, "✅ CV downloaded successfully!")),
                );
            }
            Action::Clear => self.clear(),
            Action::Theme => {
                let theme = host.toggle_theme();
                self.push(OutputBlock::line(
                    LineKind::Success,
                    format!("🎨 Theme changed to: {}", theme.as_str()),
                ));
            }
            Action::Goto => self.goto(&args.to_ascii_lowercase(), host),
            Action::Matrix => {
                self.push(OutputBlock::line(LineKind::Success, canned::MATRIX_QUIP));
                self.push(OutputBlock::line(LineKind::Matrix, canned::MATRIX_BITS));
            }
            Action::Mining => self.mine(host),
            Action::Exit => self.close(),
        }
    }

    fn goto(&mut self, section: &str, host: &mut impl TerminalHost) {
        if section.is_empty() {
            self.push(OutputBlock::line(LineKind::Error, "Usage: goto <section>"));
            self.push(OutputBlock::line(LineKind::Info, canned::sections_hint()));
            return;
        }

        if !is_section(section) {
            self.push(OutputBlock::line(
                LineKind::Error,
                format!("Section '{section}' not found"),
            ));
            return;
        }

        host.navigate(section);
        self.push(OutputBlock::line(
            LineKind::Success,
            format!("📍 Navigating to: {section}"),
        ));
        host.schedule(canned::GOTO_CLOSE_DELAY_MS, Deferred::Close);
    }

    fn mine(&mut self, host: &mut impl TerminalHost) {
        self.push(OutputBlock::line(LineKind::Info, "⛏️ Mining simulation started..."));

        let mut delay = 0;
        for _ in 0..canned::MINING_FINDS {
            delay += canned::MINING_INTERVAL_MS;
            let mineral = canned::MINERALS[self.rng.gen_range(0..canned::MINERALS.len())];
            host.schedule(
                delay,
                Deferred::Output(OutputBlock::line(LineKind::Success, format!("Found: {mineral}!"))),
            );
        }

        host.schedule(
            delay + canned::MINING_INTERVAL_MS,
            Deferred::Output(OutputBlock::line(
                LineKind::Success,
                "⛏️ Mining complete! You are rich! 💰",
            )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::COMMANDS;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingHost {
        theme: Theme,
        navigated: Vec<String>,
        downloads: Vec<(String, String)>,
        scheduled: Vec<(u32, Deferred)>,
    }

    impl TerminalHost for RecordingHost {
        fn toggle_theme(&mut self) -> Theme {
            self.theme = self.theme.toggled();
            self.theme
        }

        fn navigate(&mut self, section: &str) {
            self.navigated.push(section.to_string());
        }

        fn download(&mut self, path: &str, file_name: &str) {
            self.downloads.push((path.to_string(), file_name.to_string()));
        }

        fn schedule(&mut self, delay_ms: u32, deferred: Deferred) {
            self.scheduled.push((delay_ms, deferred));
        }
    }

    fn terminal() -> Terminal {
        Terminal::new(SmallRng::seed_from_u64(3))
    }

    /// Blocks appended by `line`, without the echoed prompt.
    fn replies(terminal: &mut Terminal, host: &mut RecordingHost, line: &str) -> Vec<OutputBlock> {
        let before = terminal.output().len();
        terminal.execute(line, host);
        terminal.output()[before..]
            .iter()
            .filter(|block| block.kind != LineKind::Command)
            .cloned()
            .collect()
    }

    #[test]
    fn first_open_greets_once() {
        let mut terminal = terminal();

        terminal.open();
        let greeted = terminal.output().len();
        assert!(greeted >= 1);
        assert_eq!(terminal.output()[0].kind, LineKind::Welcome);

        terminal.close();
        terminal.open();
        assert_eq!(terminal.output().len(), greeted);
        assert!(terminal.is_open());
    }

    #[test]
    fn help_appends_one_block_listing_every_command() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        let blocks = replies(&mut terminal, &mut host, "help");
        assert_eq!(blocks.len(), 1);

        let text = blocks[0].plain_text();
        for command in COMMANDS.iter() {
            assert!(text.contains(command.name), "help is missing {}", command.name);
            assert!(text.contains(command.description));
        }
    }

    #[test]
    fn unknown_word_is_reported_verbatim() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        let blocks = replies(&mut terminal, &mut host, "Sudo");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, LineKind::Error);
        assert_eq!(
            blocks[0].plain_text(),
            "Command not found: Sudo. Type 'help' for available commands."
        );
    }

    #[test]
    fn lookup_is_case_insensitive_and_echo_is_kept() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        terminal.execute("  ABOUT  ", &mut host);
        assert_eq!(terminal.output()[0].plain_text(), "> ABOUT");
        assert_eq!(terminal.output()[1].kind, LineKind::Info);
    }

    #[test]
    fn blank_lines_do_nothing() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        terminal.execute("   ", &mut host);
        assert!(terminal.output().is_empty());

        terminal.history_up();
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn history_recall_through_input_field() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();
        for line in ["about", "skills", "contact"] {
            terminal.set_input(line);
            terminal.submit(&mut host);
        }
        assert_eq!(terminal.input(), "");

        terminal.history_up();
        terminal.history_up();
        terminal.history_up();
        terminal.history_down();
        assert_eq!(terminal.input(), "skills");

        terminal.history_up();
        terminal.history_up();
        terminal.history_up();
        assert_eq!(terminal.input(), "about");

        for _ in 0..3 {
            terminal.history_down();
        }
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn tab_completes_single_match_and_lists_many() {
        let mut terminal = terminal();

        terminal.set_input("soc");
        terminal.autocomplete();
        assert_eq!(terminal.input(), "social");

        terminal.set_input("e");
        terminal.autocomplete();
        assert_eq!(terminal.input(), "e");
        assert_eq!(
            terminal.output().last().map(OutputBlock::plain_text).as_deref(),
            Some("Suggestions: experience, education, exit")
        );

        let before = terminal.output().len();
        terminal.set_input("xyz");
        terminal.autocomplete();
        assert_eq!(terminal.input(), "xyz");
        assert_eq!(terminal.output().len(), before);
    }

    #[test]
    fn theme_command_reports_new_theme() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        let blocks = replies(&mut terminal, &mut host, "theme");
        assert_eq!(host.theme, Theme::Light);
        assert_eq!(blocks[0].plain_text(), "🎨 Theme changed to: light");
    }

    #[test]
    fn goto_known_section_navigates_then_closes() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();
        terminal.open();

        replies(&mut terminal, &mut host, "goto Projects");
        assert_eq!(host.navigated, vec!["projects"]);
        assert_eq!(host.scheduled, vec![(500, Deferred::Close)]);

        let (_, deferred) = host.scheduled.remove(0);
        terminal.apply(deferred);
        assert!(!terminal.is_open());
    }

    #[test]
    fn goto_without_or_with_bad_section_explains() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        let usage = replies(&mut terminal, &mut host, "goto");
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].plain_text(), "Usage: goto <section>");
        assert!(usage[1].plain_text().contains("certifications"));

        let missing = replies(&mut terminal, &mut host, "goto moon");
        assert_eq!(missing[0].plain_text(), "Section 'moon' not found");
        assert!(host.navigated.is_empty());
    }

    #[test]
    fn cv_downloads_and_confirms_later() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        replies(&mut terminal, &mut host, "cv");
        assert_eq!(host.downloads, vec![(CV_PATH.to_string(), CV_FILE_NAME.to_string())]);
        assert_eq!(host.scheduled.len(), 1);
        assert_eq!(host.scheduled[0].0, 1_000);
    }

    #[test]
    fn clear_leaves_only_notice() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();
        terminal.execute("about", &mut host);

        terminal.execute("clear", &mut host);
        assert_eq!(terminal.output().len(), 1);
        assert_eq!(terminal.output()[0].plain_text(), canned::CLEARED);
    }

    #[test]
    fn mining_schedules_finds_then_completion() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();

        replies(&mut terminal, &mut host, "mining");
        let delays: Vec<u32> = host.scheduled.iter().map(|(delay, _)| *delay).collect();
        assert_eq!(delays, vec![500, 1000, 1500, 2000, 2500, 3000]);

        for (_, deferred) in &host.scheduled[..5] {
            let Deferred::Output(block) = deferred else {
                panic!("expected output");
            };
            assert!(block.plain_text().starts_with("Found: "));
        }
    }

    #[test]
    fn exit_closes() {
        let mut terminal = terminal();
        let mut host = RecordingHost::default();
        terminal.open();

        terminal.execute("exit", &mut host);
        assert!(!terminal.is_open());
    }

    #[test]
    fn meter_bar_rounds_to_tenths() {
        assert_eq!(meter_bar(90), "█████████░ 90%");
        assert_eq!(meter_bar(85), "█████████░ 85%");
        assert_eq!(meter_bar(100), "██████████ 100%");
        assert_eq!(meter_bar(0), "░░░░░░░░░░ 0%");
    }
}
