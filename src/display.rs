//! Terminal output helpers.

use crate::constants::{ELLIPSIS, PREVIEW_MAX_LEN, RULE};
use crate::ioutils::truncate_chars;
use crate::templates::Template;
use console::style;

pub fn heading(text: &str) {
    println!("{}", style(text).cyan());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), style(text).green());
}

pub fn warning(text: &str) {
    println!("{}", style(text).yellow());
}

/// Prints `body` between two horizontal rules.
pub fn ruled(title: &str, body: &str) {
    println!();
    heading(title);
    println!("{RULE}");
    println!("{body}");
    println!("{RULE}");
}

pub fn template_preview(body: &str) {
    ruled("Prompt Preview:", &truncate_chars(body, PREVIEW_MAX_LEN, ELLIPSIS));
}

/// One `prompt list` line: ordinal, name and optional faint description.
pub fn template_line(index: usize, template: &Template) -> String {
    let mut line = format!("{:2}. {}", index + 1, style(&template.name).green());
    if let Some(description) = &template.description {
        line.push_str(&format!("    {}", style(description).dim()));
    }
    line
}

pub fn template_list(templates: &[Template]) {
    println!();
    heading("Available Prompts:");
    println!();
    for (i, template) in templates.iter().enumerate() {
        println!("{}", template_line(i, template));
    }
}

pub fn usage_hints() {
    println!();
    warning("Usage:");
    println!("  Run a prompt: now-sc prompt run <name>");
    println!("  Interactive:  now-sc prompt");
}
