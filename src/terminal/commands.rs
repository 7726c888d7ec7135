#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Help,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
    Cv,
    Social,
    Clear,
    Theme,
    Goto,
    Matrix,
    Mining,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

const fn command(name: &'static str, description: &'static str, action: Action) -> Command {
    Command {
        name,
        description,
        action,
    }
}

/// Registry in display order; `help` and tab completion walk it as-is.
pub const COMMANDS: [Command; 15] = [
    command("help", "Show available commands", Action::Help),
    command("about", "About Miqueas Quintanilla", Action::About),
    command("skills", "List technical skills", Action::Skills),
    command("experience", "Show work experience", Action::Experience),
    command("projects", "List featured projects", Action::Projects),
    command("education", "Show education details", Action::Education),
    command("contact", "Display contact information", Action::Contact),
    command("cv", "Download CV/Resume", Action::Cv),
    command("social", "Show social media links", Action::Social),
    command("clear", "Clear terminal screen", Action::Clear),
    command("theme", "Toggle dark/light theme", Action::Theme),
    command("goto", "Navigate to section (usage: goto <section>)", Action::Goto),
    command("matrix", "Enable matrix rain effect", Action::Matrix),
    command("mining", "Mining simulation easter egg", Action::Mining),
    command("exit", "Close terminal", Action::Exit),
];

pub fn lookup(word: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name.eq_ignore_ascii_case(word))
}

pub fn completions(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_ascii_lowercase();

    COMMANDS
        .iter()
        .map(|command| command.name)
        .filter(|name| name.starts_with(&prefix))
        .collect()
}
