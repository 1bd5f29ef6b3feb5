// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

pub const LINKEDIN_COMPANY_PREFIX: &str = "https://www.linkedin.com/company/";

/// How company inputs were entered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Name,
    Url,
}

/// Derive the company name used for searching from a bare name or a URL.
/// For URLs this is the last non-empty path segment.
pub fn company_name_from_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();

    if let Ok(url) = Url::parse(trimmed) {
        if url.has_host() {
            return url
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .unwrap_or_default()
                .to_string();
        }
    }

    trimmed
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Turn a company name into a LinkedIn company URL; URLs pass through
pub fn format_company_input(input: &str, mode: InputMode) -> Option<String> {
    if mode == InputMode::Url {
        let trimmed = input.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    let slug = slugify_company_name(input);
    if slug.is_empty() {
        None
    } else {
        Some(format!("{}{}", LINKEDIN_COMPANY_PREFIX, slug))
    }
}

/// Lowercase, keep word chars and hyphens, join whitespace runs with `-`
pub fn slugify_company_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// `https://www.linkedin.com/company/acme-corp` -> `Acme Corp`
pub fn company_display_name(company_url: &str) -> String {
    company_url
        .trim_start_matches(LINKEDIN_COMPANY_PREFIX)
        .trim_end_matches('/')
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim region codes, drop empties and exact duplicates, keep first-seen order.
/// Case is left as typed; the provider receives the codes verbatim.
pub fn normalize_regions(regions: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for region in regions {
        let code = region.trim().to_string();
        if !code.is_empty() && !normalized.contains(&code) {
            normalized.push(code);
        }
    }
    normalized
}

/// Read file content as string with proper error context
pub async fn read_file_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content with proper error context
pub async fn write_file_content(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
