use regex::Regex;

use crate::config::PatternsConfig;
use crate::error::{IssueBranchError, Result};

/// A GitHub issue title decomposed into the pieces needed to derive a
/// branch name and a commit message.
///
/// Constructed once by [`ParsedTitle::parse`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Decimal digits only, no leading `#`.
    pub issue_number: String,
    /// Title with the `#<number>` token removed, casing and punctuation preserved.
    pub raw_description: String,
    /// Lower-cased description reduced to `[0-9a-z _]` with single spaces.
    pub slug_description: String,
    pub branch_name: String,
    pub commit_message: String,
}

impl ParsedTitle {
    /// Parse a free-form issue title containing a `#<digits>` reference.
    ///
    /// When the title references several issues, the last `#<digits>` run
    /// wins ("#1 fix #2" refers to issue 2). Fails with
    /// [`IssueBranchError::MalformedTitle`] when no reference is present.
    pub fn parse(title: &str, patterns: &PatternsConfig) -> Result<Self> {
        let issue_re = Regex::new(r"#(\d+)").unwrap();
        let issue_number = issue_re
            .captures_iter(title)
            .last()
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                IssueBranchError::malformed_title(format!(
                    "no '#<digits>' issue reference in '{}'",
                    title
                ))
            })?;

        // Drop the first occurrence of the exact `#<number>` token.
        let token = format!("#{}", issue_number);
        let raw_description = title.replacen(&token, "", 1).trim().to_string();

        let slug_description = slugify(&raw_description);

        let branch_name = render_branch_name(&patterns.branch_format, &issue_number, &slug_description);
        let commit_message = patterns
            .commit_format
            .replace("{number}", &issue_number)
            .replace("{description}", &raw_description);

        Ok(ParsedTitle {
            issue_number,
            raw_description,
            slug_description,
            branch_name,
            commit_message,
        })
    }
}

/// Reduce a description to the branch-safe character set.
///
/// Every character outside `[0-9a-zA-Z _]` becomes a space, runs of
/// spaces collapse to one, and the result is lower-cased and trimmed.
/// Applying this to an already-slugged string is a no-op.
pub fn slugify(description: &str) -> String {
    let replaced: String = description
        .chars()
        .map(|c| match c {
            '0'..='9' | 'a'..='z' | 'A'..='Z' | ' ' | '_' => c,
            _ => ' ',
        })
        .collect();

    let mut collapsed = String::with_capacity(replaced.len());
    let mut prev_space = false;
    for c in replaced.chars() {
        if c == ' ' {
            if !prev_space {
                collapsed.push(c);
            }
            prev_space = true;
        } else {
            collapsed.push(c);
            prev_space = false;
        }
    }

    collapsed.to_lowercase().trim().to_string()
}

/// Render the branch name from the configured pattern.
///
/// `{slug}` is the slug with spaces replaced by hyphens. An empty slug
/// would leave a dangling separator ("issue-42-"), so trailing hyphens
/// are trimmed.
fn render_branch_name(pattern: &str, number: &str, slug: &str) -> String {
    let hyphenated = slug.split(' ').collect::<Vec<_>>().join("-");
    let name = pattern
        .replace("{number}", number)
        .replace("{slug}", &hyphenated);
    name.trim_end_matches('-').to_string()
}
