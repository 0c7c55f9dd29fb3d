use std::collections::VecDeque;

use thiserror::Error;

use crate::config::OWNER;

static HISTORY_SIZE: usize = 100;

const HELP_TEXT: &str = r#"Navigate this page from the keyboard:
    cd      jump to a section (cd projects)
    clear   clear the terminal output
    grep    search the blog (grep kubernetes)
    help    show this message
    ls      list sections
    tags    list blog tags
    theme   toggle dark mode
    whoami  print the site owner
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRes {
    EmptyErr,
    Err(String),
    Output(String),
    Navigate(String),
    Search(String),
    ToggleTheme,
    Nothing,
}

impl CommandRes {
    pub fn is_err(&self) -> bool {
        matches!(self, Self::EmptyErr | Self::Err(_))
    }
}

impl From<TerminalError> for CommandRes {
    fn from(e: TerminalError) -> Self {
        Self::Err(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    #[error("command not found: {0}")]
    NotFound(String),
    #[error("cd: no such section: {0}")]
    NoSuchSection(String),
    #[error("{0}: too many arguments")]
    TooManyArgs(&'static str),
    #[error("usage: grep PATTERN")]
    GrepUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Ls,
    Cd,
    Grep,
    Tags,
    Theme,
    WhoAmI,
    Clear,
    Unknown,
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        match value {
            "help" => Self::Help,
            "ls" => Self::Ls,
            "cd" => Self::Cd,
            "grep" => Self::Grep,
            "tags" => Self::Tags,
            "theme" => Self::Theme,
            "whoami" => Self::WhoAmI,
            "clear" => Self::Clear,
            _ => Self::Unknown,
        }
    }
}

impl Command {
    fn all() -> Vec<&'static str> {
        vec![
            "cd", "clear", "grep", "help", "ls", "tags", "theme", "whoami",
        ]
    }
}

pub struct Terminal {
    sections: Vec<String>,
    tags: Vec<String>,
    history: VecDeque<String>,
}

impl Terminal {
    pub fn new(sections: &[&str], tags: &[String]) -> Self {
        Self {
            sections: sections.iter().map(|s| s.to_string()).collect(),
            tags: tags.to_vec(),
            history: VecDeque::new(),
        }
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    pub fn handle_command(&mut self, input: &str) -> CommandRes {
        let mut parts = input.split_whitespace();
        let Some(cmd_text) = parts.next() else {
            return CommandRes::EmptyErr;
        };
        self.history.push_back(input.trim().to_string());
        if self.history.len() > HISTORY_SIZE {
            self.history.pop_front();
        }
        let args = parts.collect::<Vec<_>>();

        let res = match Command::from(cmd_text) {
            Command::Help => Ok(CommandRes::Output(HELP_TEXT.to_string())),
            Command::Ls => Ok(CommandRes::Output(self.sections.join("  "))),
            Command::Cd => self.cd(&args),
            Command::Grep if args.is_empty() => Err(TerminalError::GrepUsage),
            Command::Grep => Ok(CommandRes::Search(args.join(" "))),
            Command::Tags => Ok(CommandRes::Output(self.tags.join("  "))),
            Command::Theme => Ok(CommandRes::ToggleTheme),
            Command::WhoAmI => Ok(CommandRes::Output(OWNER.to_string())),
            Command::Clear => Ok(CommandRes::Nothing),
            Command::Unknown => Err(TerminalError::NotFound(cmd_text.to_string())),
        };
        res.unwrap_or_else(CommandRes::from)
    }

    fn cd(&self, args: &[&str]) -> Result<CommandRes, TerminalError> {
        let target = match args {
            [] => return Ok(CommandRes::Navigate(self.home())),
            [target] => target.trim_start_matches('#').trim_matches('/'),
            _ => return Err(TerminalError::TooManyArgs("cd")),
        };
        if target.is_empty() || target == "~" {
            return Ok(CommandRes::Navigate(self.home()));
        }
        self.sections
            .iter()
            .find(|s| *s == target)
            .map(|s| CommandRes::Navigate(s.clone()))
            .ok_or_else(|| TerminalError::NoSuchSection(target.to_string()))
    }

    fn home(&self) -> String {
        self.sections.first().cloned().unwrap_or_default()
    }

    /// History entries starting with `input`, oldest first.
    pub fn handle_start_hist(&self, input: &str) -> Vec<String> {
        self.history
            .iter()
            .filter(|s| input.trim().is_empty() || s.starts_with(input))
            .cloned()
            .collect()
    }

    /// Completions for the last word of `input`: command names for the first
    /// word, section names after `cd`, tags after `grep`.
    pub fn handle_start_tab(&self, input: &str) -> Vec<String> {
        let mut parts = input.split_whitespace();
        let Some(cmd_text) = parts.next() else {
            return Vec::new();
        };
        let rest = parts.collect::<Vec<_>>();
        let completing_first = rest.is_empty() && !input.ends_with(' ');
        if completing_first {
            return Command::all()
                .into_iter()
                .filter(|c| c.starts_with(cmd_text))
                .map(String::from)
                .collect();
        }
        let prefix = if input.ends_with(' ') {
            ""
        } else {
            rest.last().copied().unwrap_or_default()
        };
        let pool = match Command::from(cmd_text) {
            Command::Cd => &self.sections,
            Command::Grep => &self.tags,
            _ => return Vec::new(),
        };
        let mut opts = pool
            .iter()
            .filter(|s| s.starts_with(prefix))
            .cloned()
            .collect::<Vec<_>>();
        opts.sort();
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECTIONS;

    fn terminal() -> Terminal {
        let tags = vec![
            "All".to_string(),
            "AWS".to_string(),
            "Kubernetes".to_string(),
        ];
        Terminal::new(&SECTIONS, &tags)
    }

    #[test]
    fn test_empty_input() {
        let mut t = terminal();
        assert_eq!(t.handle_command("   "), CommandRes::EmptyErr);
        assert!(t.history().is_empty());
    }

    #[test]
    fn test_cd() {
        let mut t = terminal();
        assert_eq!(
            t.handle_command("cd projects"),
            CommandRes::Navigate("projects".to_string())
        );
        assert_eq!(
            t.handle_command("cd #blog"),
            CommandRes::Navigate("blog".to_string())
        );
        assert_eq!(
            t.handle_command("cd"),
            CommandRes::Navigate("hero".to_string())
        );
        assert_eq!(
            t.handle_command("cd ~"),
            CommandRes::Navigate("hero".to_string())
        );
        assert_eq!(
            t.handle_command("cd nowhere"),
            CommandRes::Err("cd: no such section: nowhere".to_string())
        );
        assert!(t.handle_command("cd a b").is_err());
    }

    #[test]
    fn test_grep_and_theme() {
        let mut t = terminal();
        assert_eq!(
            t.handle_command("grep cost optimization"),
            CommandRes::Search("cost optimization".to_string())
        );
        assert_eq!(
            t.handle_command("grep"),
            CommandRes::Err("usage: grep PATTERN".to_string())
        );
        assert_eq!(t.handle_command("theme"), CommandRes::ToggleTheme);
    }

    #[test]
    fn test_output_commands() {
        let mut t = terminal();
        let CommandRes::Output(ls) = t.handle_command("ls") else {
            panic!("ls should print sections");
        };
        assert!(ls.starts_with("hero  about"));
        let CommandRes::Output(help) = t.handle_command("help") else {
            panic!("help should print text");
        };
        assert!(help.contains("grep"));
        assert_eq!(
            t.handle_command("whoami"),
            CommandRes::Output(OWNER.to_string())
        );
        assert_eq!(t.handle_command("clear"), CommandRes::Nothing);
        assert_eq!(
            t.handle_command("rm -rf /"),
            CommandRes::Err("command not found: rm".to_string())
        );
    }

    #[test]
    fn test_history() {
        let mut t = terminal();
        t.handle_command("ls");
        t.handle_command("cd about");
        t.handle_command("cd blog");
        assert_eq!(t.handle_start_hist("cd"), vec!["cd about", "cd blog"]);
        assert_eq!(t.handle_start_hist("").len(), 3);

        for _ in 0..HISTORY_SIZE {
            t.handle_command("ls");
        }
        assert_eq!(t.history().len(), HISTORY_SIZE);
    }

    #[test]
    fn test_tab_completion() {
        let t = terminal();
        assert_eq!(t.handle_start_tab("th"), vec!["theme"]);
        assert_eq!(t.handle_start_tab("c"), vec!["cd", "clear"]);
        assert_eq!(t.handle_start_tab("cd ex"), vec!["experience"]);
        assert_eq!(t.handle_start_tab("cd ").len(), SECTIONS.len());
        assert_eq!(t.handle_start_tab("grep K"), vec!["Kubernetes"]);
        assert!(t.handle_start_tab("ls x").is_empty());
        assert!(t.handle_start_tab("").is_empty());
    }
}
