//! Console output utilities.

use chrono::{TimeZone, Utc};
use console::style;

use crate::aggregate::state::Aggregation;
use crate::api::types::Post;
use crate::config::loader::QueryConfig;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a debug message.
pub fn print_debug(message: &str) {
    println!("{} {}", style("DEBUG").dim(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Gallery                                    ║
║     Media aggregation for subreddit listings          ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print query summary.
pub fn print_query_summary(query: &QueryConfig) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Source: r/{}", query.source);
    println!("  Sort: {}", query.sort);
    if let Some(filter) = query.time_filter {
        if query.sort.takes_time_filter() {
            println!("  Time filter: {}", filter);
        }
    }
    println!("  Limit: {}", query.limit);
    println!();
}

/// Print the collected media posts.
pub fn print_media_results(posts: &[Post], limit: u32) {
    println!();
    if posts.is_empty() {
        print_warning("No media posts found");
        return;
    }

    println!(
        "{}",
        style(format!("Media posts ({}/{} requested):", posts.len(), limit)).bold()
    );
    for (index, post) in posts.iter().enumerate() {
        print_post(index + 1, post);
    }
}

/// Print the posts that were passed over as non-media.
pub fn print_non_media_results(posts: &[Post]) {
    if posts.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        style(format!("Non-media posts ({}):", posts.len())).bold()
    );
    for post in posts {
        println!("  - {}", post.title);
        println!("    {}", style(&post.url).dim());
    }
}

fn print_post(number: usize, post: &Post) {
    println!();
    println!("{}. {}", number, style(&post.title).bold());
    println!("   {}", style(&post.url).cyan());
    if !post.permalink.is_empty() {
        println!(
            "   {}",
            style(format!("https://reddit.com{}", post.permalink)).dim()
        );
    }
    println!(
        "   {}",
        style(format!(
            "u/{} | {} points | {}",
            post.author,
            post.score,
            format_timestamp(post.created_utc)
        ))
        .dim()
    );
}

/// Print the run summary block.
pub fn print_run_summary(aggregation: &Aggregation, limit: u32) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Summary:").bold());
    println!("  Media posts:     {}/{}", aggregation.media.len(), limit);
    println!("  Non-media posts: {}", aggregation.non_media.len());
    println!("  Requests issued: {}", aggregation.requests_issued);
    if aggregation.termination.is_error() {
        println!(
            "  Ended:           {}",
            style(aggregation.termination).red()
        );
    } else {
        println!("  Ended:           {}", aggregation.termination);
    }
    println!("{}", style("═".repeat(50)).dim());
}

fn format_timestamp(created_utc: f64) -> String {
    match Utc.timestamp_opt(created_utc as i64, 0).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_string(),
    }
}
