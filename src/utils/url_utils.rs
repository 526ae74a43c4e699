use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Reads page slugs, one per line. Blank lines and `#` comments are skipped.
pub fn read_page_slugs(file_path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);

    let mut slugs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let slug = line.trim();
        if slug.is_empty() || slug.starts_with('#') {
            continue;
        }
        slugs.push(slug.to_string());
    }
    Ok(slugs)
}

/// Joins a deployment base URL and a page slug with exactly one `/`.
pub fn page_url(base_url: &str, slug: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        slug.trim_start_matches('/')
    )
}

/// Human readable page name: `blog/case-studies` becomes `Case Studies`.
pub fn display_name(slug: &str) -> String {
    let page = slug
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or(slug);

    page.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
