use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

enum StatusKind {
    Success,
    Info,
    Warn,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        let style = Style::new().bold();
        match self {
            StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
            StatusKind::Info => style.fg_color(Some(AnsiColor::Blue.into())),
            StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
            StatusKind::Error => style.fg_color(Some(AnsiColor::Red.into())),
        }
    }
}

fn write_status(kind: StatusKind, label: &str, message: &str) {
    let to_stderr = matches!(kind, StatusKind::Warn | StatusKind::Error);

    let (mut handle, is_tty): (Box<dyn Write>, bool) = if to_stderr {
        (Box::new(io::stderr().lock()), io::stderr().is_terminal())
    } else {
        (Box::new(io::stdout().lock()), io::stdout().is_terminal())
    };

    let use_color = is_tty && std::env::var_os("NO_COLOR").is_none();
    if use_color {
        let style = kind.style();
        let _ = writeln!(
            handle,
            "{}{label}{} {message}",
            style.render(),
            style.render_reset()
        );
    } else {
        let _ = writeln!(handle, "{label} {message}");
    }
    let _ = handle.flush();
}

pub fn info(message: impl Display) {
    write_status(StatusKind::Info, "Info", &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    write_status(StatusKind::Success, label, &message.to_string());
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    write_status(StatusKind::Error, "Error", &message.to_string());
}
