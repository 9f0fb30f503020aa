/*!
 * Tests for the translator facade
 */

use linguachat::providers::mock::MockModel;
use linguachat::router::Direction;
use linguachat::translation::{TranslationOutcome, TranslationService};

use crate::common::{failing_service, working_service};

/// Test that English input reaches the EN -> ZH model
#[tokio::test]
async fn test_translate_withEnglishInput_shouldUseEnZhModel() {
    let service = working_service();

    let outcome = service.translate("Hello, thank you").await.unwrap();
    match outcome {
        TranslationOutcome::Translated { text, direction } => {
            assert_eq!(direction, Direction::EnToZh);
            assert!(text.contains("mock-en-zh"));
        }
        other => panic!("Expected a translation, got {:?}", other),
    }
}

/// Test that Chinese input reaches the ZH -> EN model
#[tokio::test]
async fn test_translate_withChineseInput_shouldUseZhEnModel() {
    let service = working_service();

    let outcome = service.translate("你好，世界！").await.unwrap();
    match outcome {
        TranslationOutcome::Translated { text, direction } => {
            assert_eq!(direction, Direction::ZhToEn);
            assert!(text.contains("mock-zh-en"));
        }
        other => panic!("Expected a translation, got {:?}", other),
    }
}

/// Test the unsupported-language outcome
#[tokio::test]
async fn test_translate_withRussianInput_shouldReportUnsupported() {
    let service = working_service();

    let outcome = service
        .translate("Привет, как дела? Что нового?")
        .await
        .unwrap();

    assert_eq!(outcome, TranslationOutcome::Unsupported { code: "ru".to_string() });
    assert_eq!(outcome.display_text(), "Unsupported language: ru");
    assert_eq!(outcome.direction_label(), "");
    assert!(!outcome.is_translated());
}

/// Test the detection-failure outcome
#[tokio::test]
async fn test_translate_withUndetectableInput_shouldReportUndetected() {
    let service = working_service();

    let outcome = service.translate("").await.unwrap();
    assert_eq!(outcome, TranslationOutcome::Undetected);
    assert_eq!(outcome.display_text(), "Could not detect language.");
    assert_eq!(outcome.direction_label(), "");
}

/// Test that model failures propagate as errors, not outcomes
#[tokio::test]
async fn test_translate_withFailingModel_shouldPropagateError() {
    let service = failing_service();

    assert!(service.translate("Hello friend").await.is_err());
    assert!(service.translate("你好朋友").await.is_err());
}

/// Test that no translation request reaches the models on non-translate routes
#[tokio::test]
async fn test_translate_withUnsupportedInput_shouldNotInvokeModels() {
    let en_zh = MockModel::working("mock-en-zh");
    let zh_en = MockModel::working("mock-zh-en");
    let service =
        TranslationService::with_models(Box::new(en_zh.clone()), Box::new(zh_en.clone()));

    service.translate("Привет, как дела?").await.unwrap();
    service.translate("").await.unwrap();

    assert_eq!(en_zh.request_count(), 0);
    assert_eq!(zh_en.request_count(), 0);
}

/// Test that an empty model output still counts as a translation
#[tokio::test]
async fn test_translate_withEmptyModelOutput_shouldReturnEmptyTranslation() {
    let service = TranslationService::with_models(
        Box::new(MockModel::empty("mock-en-zh")),
        Box::new(MockModel::empty("mock-zh-en")),
    );

    let outcome = service.translate("Hello, thank you").await.unwrap();
    match outcome {
        TranslationOutcome::Translated { text, direction } => {
            assert_eq!(direction, Direction::EnToZh);
            assert!(text.is_empty());
        }
        other => panic!("Expected a translation, got {:?}", other),
    }
}

/// Test the connection probe against both models
#[test]
fn test_test_connection_shouldProbeBothModels() {
    tokio_test::block_on(async {
        assert!(working_service().test_connection().await.is_ok());
        assert!(failing_service().test_connection().await.is_err());
    });
}

/// Test direction labels through the outcome type
#[tokio::test]
async fn test_outcome_directionLabel_shouldMatchRoutedDirection() {
    let service = working_service();

    let outcome = service.translate("Hello, thank you").await.unwrap();
    assert_eq!(outcome.direction_label(), "EN → ZH");

    let outcome = service.translate("你好").await.unwrap();
    assert_eq!(outcome.direction_label(), "ZH → EN");
}
