//! String generator.
//!
//! The field name picks a pattern, which is then rendered with these
//! placeholders:
//! - `{first_name}` - random first name
//! - `{last_name}` - random last name
//! - `{word}` - random lowercase word
//! - `{rand:N}` - random N-digit number
//!
//! Unknown placeholders are left as written.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Angie", "James", "Maria", "Oliver", "Amara", "Hiroshi", "Priya", "Lucas", "Fatima", "Noah",
    "Ingrid", "Mateo", "Chloe", "Kwame", "Sofia", "Liam", "Yara", "Elena", "Tomasz", "Aiko",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Okafor", "Nakamura", "Patel", "Muller", "Rossi", "Kowalski", "Silva",
    "Johansson", "Dubois", "Kim", "Haddad", "O'Brien", "Novak", "Jensen", "Moreau", "Tanaka",
];

const WORDS: &[&str] = &[
    "alpha", "amber", "breeze", "canyon", "cedar", "delta", "ember", "falcon", "garnet", "harbor",
    "indigo", "juniper", "kettle", "lantern", "meadow", "nectar", "orbit", "pebble", "quartz",
    "river", "saffron", "timber", "umber", "velvet", "willow", "zephyr",
];

/// Kind of text a field name suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHint {
    FirstName,
    LastName,
    FullName,
    Email,
    Username,
    Title,
    Sentence,
    Placeholder,
}

impl TextHint {
    /// Guess the hint from a field name such as `first_name` or `EmailAddress`.
    pub fn from_field_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let has = |needle: &str| name.contains(needle);

        if has("email") {
            TextHint::Email
        } else if has("first") {
            TextHint::FirstName
        } else if has("last") || has("surname") {
            TextHint::LastName
        } else if has("user") || has("login") || has("handle") {
            TextHint::Username
        } else if has("name") {
            TextHint::FullName
        } else if has("title") || has("subject") {
            TextHint::Title
        } else if has("body") || has("comment") || has("description") || has("text") {
            TextHint::Sentence
        } else {
            TextHint::Placeholder
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            TextHint::FirstName => "{first_name}",
            TextHint::LastName => "{last_name}",
            TextHint::FullName => "{first_name} {last_name}",
            TextHint::Email => "{first_name}.{last_name}{rand:2}@example.com",
            TextHint::Username => "{first_name}{rand:3}",
            TextHint::Title => "{word} {word} {word}",
            TextHint::Sentence => "{word} {word} {word} {word} {word} {word}.",
            TextHint::Placeholder => "{word}-{rand:4}",
        }
    }
}

/// Generate a non-empty string for the field called `field_name`.
pub fn generate_text<R: Rng>(rng: &mut R, field_name: &str) -> String {
    let hint = TextHint::from_field_name(field_name);
    let rendered = render_pattern(hint.pattern(), rng);

    match hint {
        TextHint::Email | TextHint::Username => rendered.to_ascii_lowercase().replace('\'', ""),
        TextHint::Title | TextHint::Sentence => capitalize(&rendered),
        _ => rendered,
    }
}

/// Render a pattern, replacing known placeholders.
pub fn render_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);

        let Some(len) = rest[start..].find('}') else {
            rest = &rest[start..];
            break;
        };
        let end = start + len;

        match render_placeholder(&rest[start + 1..end], rng) {
            Some(value) => result.push_str(&value),
            None => result.push_str(&rest[start..=end]),
        }
        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    result
}

fn render_placeholder<R: Rng>(token: &str, rng: &mut R) -> Option<String> {
    match token {
        "first_name" => Some(pick(rng, FIRST_NAMES).to_string()),
        "last_name" => Some(pick(rng, LAST_NAMES).to_string()),
        "word" => Some(pick(rng, WORDS).to_string()),
        _ => {
            let digits = token.strip_prefix("rand:")?.parse::<usize>().ok()?;
            Some(generate_random_digits(rng, digits))
        }
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|i| {
            // No leading zero
            let low = if i == 0 { 1 } else { 0 };
            char::from(b'0' + rng.random_range(low..10u8))
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
