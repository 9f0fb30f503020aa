use once_cell::sync::Lazy;
use regex::Regex;
use whatlang::Lang;

/// Language detection heuristics for chat input
///
/// This module decides whether a piece of free text should be treated as
/// Chinese or English before any statistical detection result is trusted.
/// The two heuristics are deliberately simple: a CJK ideograph fast path
/// and an ASCII-alphabetic density check.
/// Fraction of ASCII-alphabetic characters above which text counts as English.
pub const ASCII_ALPHA_THRESHOLD: f64 = 0.6;

/// CJK Unified Ideographs block (U+4E00..U+9FFF).
static CJK_IDEOGRAPHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{4e00}-\x{9fff}]").expect("CJK character class compiles")
});

/// Check whether the text contains at least one CJK Unified Ideograph
pub fn contains_cjk(text: &str) -> bool {
    CJK_IDEOGRAPHS.is_match(text)
}

/// Ratio of ASCII-alphabetic characters to total characters
///
/// The denominator is the number of Unicode scalar values, floored at one
/// so empty input yields 0.0 rather than a division by zero.
pub fn ascii_alpha_ratio(text: &str) -> f64 {
    let total = text.chars().count().max(1);
    let alphabetic = text.chars().filter(char::is_ascii_alphabetic).count();
    alphabetic as f64 / total as f64
}

/// True when the ASCII-alphabetic density is above the English threshold
pub fn looks_english(text: &str) -> bool {
    ascii_alpha_ratio(text) > ASCII_ALPHA_THRESHOLD
}

/// Run the statistical detector over the text
///
/// Returns `None` when the detector cannot classify the input (empty text,
/// no recognizable script, too little signal).
pub fn detect_language(text: &str) -> Option<Lang> {
    whatlang::detect(text).map(|info| info.lang())
}

/// Check whether a detected language is a Chinese variant
pub fn is_chinese_variant(lang: Lang) -> bool {
    matches!(lang, Lang::Cmn)
}

/// Normalize a detected ISO 639-3 code to ISO 639-1 where one exists
///
/// whatlang reports three-letter codes ("fra", "rus"); user-facing messages
/// use the two-letter form when the language has one, and fall back to the
/// three-letter code otherwise.
pub fn normalize_to_part1(code: &str) -> String {
    let normalized = code.trim().to_lowercase();

    if let Some(lang) = isolang::Language::from_639_3(&normalized) {
        if let Some(part1) = lang.to_639_1() {
            return part1.to_string();
        }
    }

    normalized
}

/// Get the English language name for a detected code, for log output
///
/// Accepts either the two-letter or three-letter form.
pub fn language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();

    let lang = match normalized.len() {
        2 => isolang::Language::from_639_1(&normalized),
        3 => isolang::Language::from_639_3(&normalized),
        _ => None,
    };

    lang.map(|lang| lang.to_name().to_string())
}
