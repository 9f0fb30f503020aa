/*!
 * Common test utilities for the linguachat test suite
 */

use std::sync::Once;

use linguachat::providers::mock::MockModel;
use linguachat::translation::TranslationService;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging for tests that want log output visible
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build a service whose models echo input behind a direction marker
///
/// Output looks like "[mock-en-zh] <input>", so assertions can tell which
/// model handled a message.
pub fn working_service() -> TranslationService {
    TranslationService::with_models(
        Box::new(MockModel::working("mock-en-zh")),
        Box::new(MockModel::working("mock-zh-en")),
    )
}

/// Build a service whose models always fail
pub fn failing_service() -> TranslationService {
    TranslationService::with_models(
        Box::new(MockModel::failing("mock-en-zh")),
        Box::new(MockModel::failing("mock-zh-en")),
    )
}

/// Build a service with scripted outputs per direction
pub fn scripted_service(
    en_zh_output: fn(&str) -> String,
    zh_en_output: fn(&str) -> String,
) -> TranslationService {
    TranslationService::with_models(
        Box::new(MockModel::working("mock-en-zh").with_custom_output(en_zh_output)),
        Box::new(MockModel::working("mock-zh-en").with_custom_output(zh_en_output)),
    )
}
