/// Default preview length for [`format_description`].
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Default display budget for [`format_file_name`].
pub const FILE_NAME_DISPLAY_LEN: usize = 30;

/// Characters a truncated file name keeps from its stem.
const FILE_STEM_KEEP: usize = 10;

/// First character uppercased, the rest lowercased. Empty in, empty out.
#[must_use]
pub fn format_username(username: &str) -> String {
    let mut chars = username.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Partially masks the local part of an email address.
///
/// Input without `@` passes through unchanged, as does a local part of two or
/// fewer characters. Otherwise everything between the first and last character
/// of the local part becomes `*`; the split happens at the last `@` and the
/// domain is preserved.
#[must_use]
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return email.to_owned();
    };

    let len = local.chars().count();
    if len <= 2 {
        return email.to_owned();
    }

    let mut chars = local.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return email.to_owned();
    };
    format!("{first}{}{last}@{domain}", "*".repeat(len - 2))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims and collapses internal whitespace runs to single spaces.
#[must_use]
pub fn format_project_name(name: &str) -> String {
    collapse_whitespace(name)
}

/// Trims and collapses internal whitespace runs to single spaces.
#[must_use]
pub fn format_task_title(title: &str) -> String {
    collapse_whitespace(title)
}

/// Trims, then truncates to `max_length` characters plus a literal `...`
/// suffix when the trimmed text is longer.
#[must_use]
pub fn format_description(description: &str, max_length: usize) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= max_length {
        return trimmed.to_owned();
    }

    let mut preview: String = trimmed.chars().take(max_length).collect();
    preview.push_str("...");
    preview
}

/// Joins the trimmed first and last name with a single space; a missing part
/// is simply omitted.
#[must_use]
pub fn format_full_name(first_name: &str, last_name: &str) -> String {
    let first = first_name.trim();
    let last = last_name.trim();

    match (first.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (true, false) => last.to_owned(),
        (false, true) => first.to_owned(),
        (false, false) => format!("{first} {last}"),
    }
}

/// Shortens an over-long file name to `{stem prefix}...{extension}`.
///
/// Names within `max_length`, names without an extension, and names whose stem
/// is at most ten characters pass through unchanged.
#[must_use]
pub fn format_file_name(file_name: &str, max_length: usize) -> String {
    if file_name.chars().count() <= max_length {
        return file_name.to_owned();
    }

    let Some((stem, extension)) = file_name.rsplit_once('.') else {
        return file_name.to_owned();
    };
    if extension.is_empty() || stem.chars().count() <= FILE_STEM_KEEP {
        return file_name.to_owned();
    }

    let prefix: String = stem.chars().take(FILE_STEM_KEEP).collect();
    format!("{prefix}...{extension}")
}
