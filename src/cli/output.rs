use std::fmt;

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

fn label(kind: MessageKind) -> colored::ColoredString {
    match kind {
        MessageKind::Info => "[i]".cyan(),
        MessageKind::Success => "[ok]".green().bold(),
        MessageKind::Warning => "[!]".yellow().bold(),
        MessageKind::Error => "[x]".red().bold(),
    }
}

pub fn emit(kind: MessageKind, message: impl fmt::Display) {
    if kind == MessageKind::Error {
        eprintln!("{} {}", label(kind), message);
    } else {
        println!("{} {}", label(kind), message);
    }
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

/// Section header used between listing blocks.
pub fn section(title: impl fmt::Display) {
    println!("{}", format!("== {} ==", title).bold());
}
