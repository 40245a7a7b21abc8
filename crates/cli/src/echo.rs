use owo_colors::OwoColorize;
use postsmith_core::{Document, PublishResponse};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Postsmith".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "SEO blog post generator and publisher\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print a labeled value
pub fn print_field(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print a summary of a generated document
pub fn print_document_summary(document: &Document) {
    let meta = &document.metadata;
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Document".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_field("Title", &format!("{} ({} chars)", meta.title, meta.title.chars().count()));
    print_field(
        "Description",
        &format!("{} chars", meta.meta_description.chars().count()),
    );
    print_field("Slug", &meta.slug);
    print_field("Words", &meta.word_count.to_string());
    print_field("Canonical", document.canonical_url.as_str());
    eprintln!();
}

/// Print the created post
pub fn print_published(response: &PublishResponse) {
    print_success(&format!("Post {} created with status {}", response.id, response.status));
    print_field("Link", &response.link);
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
