use whatlang::Lang;

use crate::language_detect::{
    contains_cjk, detect_language, is_chinese_variant, looks_english, normalize_to_part1,
};

/// Language router for chat input
///
/// Given free text, decide which of the two supported translation
/// directions applies, or report that the text is unsupported or could not
/// be classified at all. The decision policy is fixed:
///
/// 1. Detector failure short-circuits everything, including the CJK check.
/// 2. One CJK ideograph is enough to route Chinese -> English, whatever
///    the detector said.
/// 3. ASCII-alphabetic density above the threshold, or a detector verdict
///    of English, routes English -> Chinese.
/// 4. Anything else is unsupported, reported with the detected code.
/// Translation direction between the two supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// English to Chinese
    EnToZh,
    /// Chinese to English
    ZhToEn,
}

impl Direction {
    /// User-facing direction tag
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnToZh => "EN → ZH",
            Self::ZhToEn => "ZH → EN",
        }
    }

    /// Source language code of this direction
    pub fn source(&self) -> &'static str {
        match self {
            Self::EnToZh => "en",
            Self::ZhToEn => "zh",
        }
    }

    /// Target language code of this direction
    pub fn target(&self) -> &'static str {
        match self {
            Self::EnToZh => "zh",
            Self::ZhToEn => "en",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of routing a piece of chat input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Text is in a supported language, translate along this direction
    Translate(Direction),
    /// Text was classified, but not as one of the two supported languages
    Unsupported {
        /// Detected language code, ISO 639-1 where available
        code: String,
    },
    /// The detector could not classify the text
    Undetected,
}

/// Route text using the statistical detector
pub fn route(text: &str) -> Route {
    match detect_language(text) {
        Some(lang) => route_with_detection(text, lang),
        None => Route::Undetected,
    }
}

/// Route text given an already-detected language
///
/// Split out from [`route`] so the heuristic branches can be exercised with
/// a pinned detector verdict.
pub fn route_with_detection(text: &str, detected: Lang) -> Route {
    if contains_cjk(text) || is_chinese_variant(detected) {
        return Route::Translate(Direction::ZhToEn);
    }

    if looks_english(text) || detected == Lang::Eng {
        return Route::Translate(Direction::EnToZh);
    }

    Route::Unsupported {
        code: normalize_to_part1(detected.code()),
    }
}
