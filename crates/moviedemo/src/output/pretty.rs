//! Pretty output formatting.

use moviedemo_core::movie::{Movie, MovieSummary, YearRange};
use serde_json::Value;

/// Separator printed around results.
pub fn banner() -> String {
    "=*=".repeat(10)
}

/// Frame a block of text between two banners.
pub fn framed(body: &str) -> String {
    format!("{}\n{}\n{}", banner(), body, banner())
}

/// Format a movie for display.
pub fn format_movie(movie: &Movie) -> String {
    let mut output = format!("{} ({})", movie.title, movie.year);
    if let Some(rating) = &movie.info.rating {
        output.push_str(&format!("\n  Rating: {}", rating));
    }
    if let Some(plot) = &movie.info.plot {
        output.push_str(&format!("\n  Plot: {}", plot));
    }
    for (name, value) in &movie.info.details {
        output.push_str(&format!("\n  {}: {}", label(name), format_value(value)));
    }
    output
}

/// Format the titles of a query result.
pub fn format_movies_released(year: i32, movies: &[Movie]) -> String {
    let titles = movies.iter().map(|m| m.title.as_str());
    format_titles(&format!("Movies released in {}", year), titles)
}

/// Format the titles of a scan result.
pub fn format_movies_between(range: YearRange, movies: &[MovieSummary]) -> String {
    let titles = movies.iter().map(|m| m.title.as_str());
    format_titles(
        &format!("Movies released from {} to {}", range.first, range.second),
        titles,
    )
}

fn format_titles<'a>(heading: &str, titles: impl Iterator<Item = &'a str>) -> String {
    let mut output = framed(heading);
    let mut count = 0;
    for title in titles {
        output.push('\n');
        output.push_str(title);
        count += 1;
    }
    if count == 0 {
        output.push_str("\nNo movies found.");
    }
    output
}

/// `running_time_secs` -> `Running time secs`
fn label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
