//! Static reference tables: doctype declarations and ISO 639-1 codes

/// Doctype identifiers and their literal declarations
pub const DOCTYPES: [(&str, &str); 8] = [
    ("html5", "<!DOCTYPE html>"),
    (
        "xhtml11",
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#,
    ),
    (
        "xhtml1-strict",
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#,
    ),
    (
        "xhtml1-trans",
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
    ),
    (
        "xhtml1-frame",
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#,
    ),
    (
        "html4-strict",
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
    ),
    (
        "html4-trans",
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#,
    ),
    (
        "html4-frame",
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#,
    ),
];

/// Every ISO 639-1 two-letter language code, sorted
pub const LANGUAGE_CODES: [&str; 184] = [
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
    "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
    "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
    "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
    "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms",
    "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
    "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta",
    "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
    "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Look up the DOCTYPE declaration for an identifier
///
/// # Returns
/// * `Some(&str)` - The literal declaration
/// * `None` - Empty or unrecognized identifier
pub fn doctype_declaration(id: &str) -> Option<&'static str> {
    DOCTYPES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, declaration)| *declaration)
}

/// Check whether a doctype identifier names an XHTML variant
pub fn is_xhtml(id: &str) -> bool {
    id.starts_with("xhtml")
}

/// Check whether `code` is a valid ISO 639-1 language code
pub fn is_valid_language(code: &str) -> bool {
    LANGUAGE_CODES.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctype_lookup() {
        assert_eq!(doctype_declaration("html5"), Some("<!DOCTYPE html>"));
        assert!(doctype_declaration("html4-trans")
            .is_some_and(|d| d.ends_with("\"http://www.w3.org/TR/html4/loose.dtd\">")));
        assert_eq!(doctype_declaration(""), None);
        assert_eq!(doctype_declaration("html6"), None);
    }

    #[test]
    fn test_xhtml_variants() {
        assert!(is_xhtml("xhtml11"));
        assert!(is_xhtml("xhtml1-trans"));
        assert!(!is_xhtml("html5"));
        assert!(!is_xhtml("html4-strict"));
    }

    #[test]
    fn test_language_codes_sorted_for_binary_search() {
        assert!(LANGUAGE_CODES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_language_validation() {
        assert!(is_valid_language("en"));
        assert!(is_valid_language("zu"));
        assert!(is_valid_language("aa"));
        assert!(!is_valid_language("xx"));
        assert!(!is_valid_language("EN"));
        assert!(!is_valid_language(""));
    }
}
