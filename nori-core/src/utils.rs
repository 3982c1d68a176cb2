//! Shared string transforms for identifier derivation.

/// Delimiters that separate segments in raw file and folder names.
const DELIMITERS: [char; 5] = [' ', '.', '_', '-', ','];

/// Convert a string to camelCase (e.g., "foo-bar_baz" -> "fooBarBaz").
///
/// Splits on spaces, dots, underscores, hyphens and commas. The first
/// letter of the first segment is lowered, the first letter of every
/// later segment is raised, and all other characters pass through, so
/// input that is already camelCase comes back unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut first_segment = true;
    for segment in s.split(DELIMITERS) {
        let mut chars = segment.chars();
        match chars.next() {
            None => continue,
            Some(c) if first_segment => {
                first_segment = false;
                result.extend(c.to_lowercase());
            }
            Some(c) => result.extend(c.to_uppercase()),
        }
        result.push_str(chars.as_str());
    }
    result
}

/// Convert a camelCase string to kebab-case (e.g., "fooBar" -> "foo-bar").
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Uppercase only the first character; the empty string stays empty.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Strip all whitespace.
pub fn remove_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace the fixed set of disallowed symbols with their word form and
/// drop every other character that is neither ASCII alphanumeric nor
/// whitespace, so the result is safe inside an identifier.
pub fn replace_special_characters(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '@' => result.push_str("At"),
            '&' => result.push_str("And"),
            '+' => result.push_str("Plus"),
            c if c.is_ascii_alphanumeric() || c.is_whitespace() => result.push(c),
            _ => {}
        }
    }
    result
}

/// Map a single digit to its English word.
///
/// Defined exactly on 0..=9; anything else maps to the empty string.
/// Callers substitute one leading digit at a time.
pub fn number_to_word(n: u32) -> &'static str {
    match n {
        0 => "Zero",
        1 => "One",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        _ => "",
    }
}

/// Whether the first character is an ASCII digit.
pub fn starts_with_number(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}
