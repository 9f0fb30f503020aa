/*!
 * Tests for canned reply selection
 */

use linguachat::replies::{CannedReply, select_reply};

/// Test that each keyword maps to its fixed reply
#[test]
fn test_select_reply_withSingleKeyword_shouldMatchReply() {
    assert_eq!(select_reply("Hello there"), CannedReply::Greeting);
    assert_eq!(select_reply("about the meeting tomorrow"), CannedReply::Scheduling);
    assert_eq!(select_reply("thank you so much"), CannedReply::Acknowledgment);
}

/// Test that matching is case-insensitive substring containment
#[test]
fn test_select_reply_withMixedCase_shouldStillMatch() {
    assert_eq!(select_reply("HELLO!"), CannedReply::Greeting);
    assert_eq!(select_reply("Our MEETING starts soon"), CannedReply::Scheduling);

    // "thanks" contains "thank"
    assert_eq!(select_reply("Thanks a lot"), CannedReply::Acknowledgment);
}

/// Test the priority order when several keywords appear
#[test]
fn test_select_reply_withMultipleKeywords_shouldUseFirstMatch() {
    // "hello" beats "meeting"
    assert_eq!(
        select_reply("Hello, can we plan a meeting?"),
        CannedReply::Greeting
    );

    // "meeting" beats "thank"
    assert_eq!(
        select_reply("Thank you for joining the meeting"),
        CannedReply::Scheduling
    );
}

/// Test the fallback for unmatched text
#[test]
fn test_select_reply_withoutKeywords_shouldFallBack() {
    assert_eq!(select_reply("What is the weather like?"), CannedReply::Fallback);
    assert_eq!(select_reply(""), CannedReply::Fallback);
    assert_eq!(select_reply("你好，谢谢"), CannedReply::Fallback);
}

/// Test the fixed response texts
#[test]
fn test_reply_text_shouldMatchFixedStrings() {
    assert_eq!(CannedReply::Greeting.text(), "Hi there! How can I help you today?");
    assert_eq!(CannedReply::Scheduling.text(), "We'll schedule the meeting shortly!");
    assert_eq!(CannedReply::Acknowledgment.text(), "You're very welcome!");
    assert_eq!(
        CannedReply::Fallback.text(),
        "Thanks for your message! We'll respond soon."
    );

    // Display renders the same text
    assert_eq!(CannedReply::Greeting.to_string(), CannedReply::Greeting.text());
}
