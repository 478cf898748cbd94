// src/links/slug.rs
// =============================================================================
// Turns arbitrary link titles and page names into filesystem-safe names.
//
// The rules follow the classic "slugify" recipe:
// 1. Normalize Unicode (NFKC when unicode is allowed, otherwise NFKD and
//    drop everything that is not ASCII)
// 2. Lowercase
// 3. Keep only alphanumerics, underscores, hyphens and whitespace
// 4. Collapse runs of whitespace/hyphens into one hyphen
// 5. Trim hyphens and underscores from both ends
//
// The result can be empty (e.g. a title made only of emoji). Callers use it
// as a path segment anyway.
// =============================================================================

use unicode_normalization::UnicodeNormalization;

// Converts text into a slug
//
// Parameters:
//   value: the text to convert (a link title, a page name, ...)
//   allow_unicode: keep non-ASCII letters instead of transliterating them
//
// Example:
//   slugify("Chapter 1: Intro!!", false) -> "chapter-1-intro"
pub fn slugify(value: &str, allow_unicode: bool) -> String {
    let normalized: String = if allow_unicode {
        value.nfkc().collect()
    } else {
        // NFKD splits "é" into "e" + combining accent, the accent is then dropped
        value.nfkd().filter(char::is_ascii).collect()
    };

    let lowered = normalized.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator_run = false;

    for c in lowered.chars() {
        if c == '-' || is_space(c) {
            if !in_separator_run {
                slug.push('-');
                in_separator_run = true;
            }
        } else if c.is_alphanumeric() || c == '_' {
            slug.push(c);
            in_separator_run = false;
        }
        // anything else (punctuation, symbols) is removed without breaking a run
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

// Unicode White_Space plus the ASCII information separators \x1c..=\x1f,
// which regex `\s` engines also count as whitespace
//
// Letters and digits are `char::is_alphanumeric`, which also accepts the few
// combining marks that Unicode classes as Alphabetic.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_title() {
        assert_eq!(slugify("Chapter 1: Intro!!", false), "chapter-1-intro");
    }

    #[test]
    fn test_collapses_spaces_and_dashes() {
        assert_eq!(slugify("  Week  -- 2 \t notes ", false), "week-2-notes");
    }

    #[test]
    fn test_strips_leading_and_trailing_underscores() {
        assert_eq!(slugify("__draft_v2__", false), "draft_v2");
    }

    #[test]
    fn test_transliterates_accents() {
        assert_eq!(slugify("Résumé Café", false), "resume-cafe");
    }

    #[test]
    fn test_non_ascii_only_becomes_empty() {
        assert_eq!(slugify("日本語", false), "");
        assert_eq!(slugify("", false), "");
    }

    #[test]
    fn test_allow_unicode_keeps_letters() {
        assert_eq!(slugify("Übung 3", true), "übung-3");
        // NFKC folds the "ﬁ" ligature into plain "fi"
        assert_eq!(slugify("ﬁle", true), "file");
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        assert_eq!(slugify("a\x1fb", false), "a-b");
        assert_eq!(slugify("a\x1c\x1d\x1eb", false), "a-b");
        // other control characters are just removed
        assert_eq!(slugify("a\x07b", false), "ab");
    }

    #[test]
    fn test_unicode_slugs_are_idempotent() {
        let samples = [
            ("Übung 3", "übung-3"),
            ("Ｆｕｌｌｗｉｄｔｈ Ｔｅｘｔ", "fullwidth-text"),
            ("Ça va — oui", "ça-va-oui"),
            ("日本語 ノート", "日本語-ノート"),
            ("__ﬁle__name__", "file__name"),
            ("", ""),
        ];

        for (input, expected) in samples {
            let slug = slugify(input, true);
            assert_eq!(slug, expected);
            assert!(!slug.starts_with(['-', '_']), "{:?}", slug);
            assert!(!slug.ends_with(['-', '_']), "{:?}", slug);
            assert_eq!(slugify(&slug, true), slug);
        }
    }

    #[test]
    fn test_output_alphabet_and_idempotence() {
        let samples = [
            "Chapter 1: Intro!!",
            "-_-leading and trailing-_-",
            "a - b _ c",
            "Lecture #4 (slides).pdf",
            "ÀÉÎÕÜ ñ ç",
            "tabs\tand\nnewlines",
            "---",
            "x_-_y",
        ];

        for sample in samples {
            let slug = slugify(sample, false);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
                "unexpected character in {:?}",
                slug
            );
            assert!(!slug.starts_with(['-', '_']), "{:?}", slug);
            assert!(!slug.ends_with(['-', '_']), "{:?}", slug);
            assert_eq!(slugify(&slug, false), slug);
        }
    }
}
