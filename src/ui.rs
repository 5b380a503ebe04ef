//! Terminal output for jdkenv.
//!
//! `list` and `current` are read by shell scripts as often as by people, so
//! with colors off every helper here degrades to the bare text: no escape
//! codes, ASCII icons, markdown tables, and spinners that print their final
//! message as a plain line. Colors are off when `--no-color` is given,
//! `NO_COLOR` is set, `TERM=dumb`, or stdout is not a terminal in auto mode.

use anstream::{eprintln, println};
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::io::IsTerminal;
use std::time::Duration;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// Status marker in `doctor` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Ok,
    Warn,
    Err,
    Info,
}

fn color_wanted(mode: ColorMode, no_color_env: bool, term: Option<&str>, stdout_tty: bool) -> bool {
    if no_color_env || term == Some("dumb") {
        return false;
    }
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty,
    }
}

#[derive(Debug, Clone)]
pub struct Ui {
    pub color_enabled: bool,
    /// Spinners need both a TTY and colors
    pub spinner_enabled: bool,
    /// Prompts need stdin and stdout on a terminal
    pub interactive: bool,
}

impl Ui {
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let term = std::env::var("TERM").ok();
        let color_enabled = !force_no_color
            && color_wanted(
                mode,
                std::env::var_os("NO_COLOR").is_some(),
                term.as_deref(),
                stdout_tty,
            );

        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self {
            color_enabled,
            spinner_enabled: color_enabled && stdout_tty,
            interactive: stdout_tty && std::io::stdin().is_terminal(),
        }
    }

    fn label_style(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color))).bold()
        } else {
            Style::new()
        }
    }

    /// `WARN <msg>` on stdout, next to the soft messages it qualifies
    pub fn warn(&self, msg: impl AsRef<str>) {
        let label = self.label_style(AnsiColor::Yellow);
        println!("{label}WARN{label:#} {}", msg.as_ref());
    }

    /// `ERROR <msg>` on stderr; only fatal failures go here
    pub fn err(&self, msg: impl AsRef<str>) {
        let label = self.label_style(AnsiColor::Red);
        eprintln!("{label}ERROR{label:#} {}", msg.as_ref());
    }

    pub fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s.as_ref(), Style::new().bold())
    }

    pub fn colored(&self, s: impl AsRef<str>, color: AnsiColor) -> String {
        self.paint(s.as_ref(), Style::new().fg_color(Some(Color::Ansi(color))))
    }

    fn paint(&self, s: &str, style: Style) -> String {
        if self.color_enabled {
            format!("{style}{s}{style:#}")
        } else {
            s.to_string()
        }
    }

    pub fn icon(&self, icon: Icon) -> &'static str {
        match (icon, self.color_enabled) {
            (Icon::Ok, true) => "✓",
            (Icon::Ok, false) => "[OK]",
            (Icon::Warn, true) => "⚠",
            (Icon::Warn, false) => "[!]",
            (Icon::Err, true) => "✗",
            (Icon::Err, false) => "[X]",
            (Icon::Info, true) => "•",
            (Icon::Info, false) => "-",
        }
    }

    /// Table for the doctor's per-root summary
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(if self.color_enabled {
            presets::UTF8_FULL_CONDENSED
        } else {
            presets::ASCII_MARKDOWN
        });
        table
    }

    pub fn cell(&self, content: impl Into<String>) -> Cell {
        Cell::new(content.into())
    }

    pub fn header_cell(&self, content: impl Into<String>) -> Cell {
        let cell = self.cell(content);
        if self.color_enabled {
            cell.add_attribute(comfy_table::Attribute::Bold)
        } else {
            cell
        }
    }

    /// Spinner shown while the pointer is replaced; hidden when disabled
    pub fn spinner(&self, message: impl Into<Cow<'static, str>>) -> ProgressBar {
        let pb = if self.spinner_enabled {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner:.cyan} {msg}")
                    .expect("valid template"),
            );
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_message(message);
        pb
    }

    /// Leave `msg` as the final line, whether or not the spinner was visible
    pub fn spinner_finish(&self, pb: &ProgressBar, msg: impl Into<Cow<'static, str>>) {
        let msg = msg.into();
        if self.spinner_enabled {
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg}")
                    .expect("valid template"),
            );
            pb.finish_with_message(msg);
        } else {
            pb.finish_and_clear();
            self.println(msg);
        }
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    pub fn newline(&self) {
        println!();
    }

    pub fn section(&self, title: impl AsRef<str>) {
        println!("{}", self.bold(title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("AUTO".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_color_wanted() {
        assert!(color_wanted(ColorMode::Always, false, Some("xterm"), false));
        assert!(color_wanted(ColorMode::Auto, false, None, true));
        assert!(!color_wanted(ColorMode::Auto, false, None, false));
        assert!(!color_wanted(ColorMode::Always, true, None, true));
        assert!(!color_wanted(ColorMode::Always, false, Some("dumb"), true));
        assert!(!color_wanted(ColorMode::Never, false, None, true));
    }

    #[test]
    fn test_ui_force_no_color() {
        let ui = Ui::new(ColorMode::Always, true);
        assert!(!ui.color_enabled);
        assert!(!ui.spinner_enabled);
    }

    #[test]
    fn test_plain_text_without_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.bold("jdk-17"), "jdk-17");
        assert_eq!(ui.colored("jdk-17", AnsiColor::Green), "jdk-17");
        assert_eq!(ui.icon(Icon::Ok), "[OK]");
        assert_eq!(ui.icon(Icon::Err), "[X]");
        assert_eq!(ui.icon(Icon::Warn), "[!]");
        assert_eq!(ui.icon(Icon::Info), "-");
    }

    #[test]
    fn test_hidden_spinner_finishes() {
        let ui = Ui::new(ColorMode::Never, false);
        let pb = ui.spinner("Switching...");
        ui.spinner_finish(&pb, "done");
        assert!(pb.is_finished());
    }
}
