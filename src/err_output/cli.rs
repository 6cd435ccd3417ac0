use colored::Colorize;
use pad::{Alignment, PadStr};
use crate::errors::{Component, Diagnostic, ErrorLevel, ErrorReporter};
use crate::helpers::lineify;

// diagnostics go to stderr so stdout only ever carries the transcript
pub fn output_errors_to_cli(reporter: &ErrorReporter) {
    let lines = lineify(reporter.file);
    for err in &reporter.errors {
        err.print(&reporter.file_name, &lines);
    }
}

fn fmt_line(line: &str, char_start: usize) -> String {
    if line.chars().count() < 250 {
        return line.to_string()
    }
    line.chars().take(char_start + 1).collect()
}

impl Diagnostic {
    fn print(&self, file: &str, lines: &[String]) {
        let level = if self.level == ErrorLevel::WARN {
            "warning".yellow()
        } else {
            "error".red()
        };
        let comp = match self.component {
            Component::LEXER => "lexer",
            Component::PARSER => "parser",
            Component::RUNTIME => "runtime",
        };
        let (line_start, char_start, end) = self.location;
        let end_str = match end {
            Some((end_line, end_char)) => format!(" -> {}:{}", end_line, end_char),
            None => "".to_string()
        };
        eprintln!("(unpackjs/{}) {} in {}:{}:{}{}\n {}", comp.italic(), level, file.blue(), line_start, char_start, end_str, self.get_message().bold());
        eprintln!();
        let line = match line_start.checked_sub(1).and_then(|ix| lines.get(ix)) {
            Some(line) => fmt_line(line, char_start),
            None => return
        };
        let prev_line = line_start.checked_sub(2).and_then(|ix| lines.get(ix));
        let next_line = lines.get(line_start);
        if let Some(prev_line) = prev_line {
            eprintln!("[{}]: {}", line_start - 1, prev_line);
        }
        let line_data = format!("[{}]: ", line_start);
        let width = line_data.len() + char_start.saturating_sub(1);
        eprintln!("{}{}", line_data, line.bold());
        let marker = match end {
            // ranges spanning lines are underlined to the end of the first line
            Some((end_line, end_char)) => {
                let stop = if end_line == line_start { end_char } else { line.chars().count() + 1 };
                "^".repeat(stop.saturating_sub(char_start).max(1))
            }
            None => "^".to_string()
        };
        eprintln!("{}", marker.pad_to_width_with_alignment(width + marker.len(), Alignment::Right).yellow());
        if let Some(next_line) = next_line {
            eprintln!("[{}]: {}", line_start + 1, next_line);
        }
        if !self.fixes.is_empty() {
            eprintln!();
            eprintln!("{}", "Potential fixes:".bold());
            for fix in &self.fixes {
                eprintln!("\t- {}", fix.bold())
            }
        }
        if let Some(cause) = &self.cause {
            eprintln!("{}", "Caused by:".bold());
            eprintln!("{}", cause.yellow());
        }
    }
}
