//! Message transformers.
//!
//! A transformer is a pure function from one [`Message`] to a new one. The
//! handler only depends on the [`MessageTransformer`] trait; the concrete
//! implementation is chosen when the application is built.

use super::value_object::Message;

/// Transforms a message into a new message.
///
/// Implementations must not keep mutable state: the same transformer instance
/// is shared by every request.
#[cfg_attr(test, mockall::automock)]
pub trait MessageTransformer: Send + Sync {
    /// Build a new message from `message`, leaving the input untouched.
    fn transform(&self, message: &Message) -> Message;
}

/// Upper-cases the whole message text.
///
/// Uses Unicode case mapping, which does not depend on the process locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseTransformer;

impl UppercaseTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl MessageTransformer for UppercaseTransformer {
    fn transform(&self, message: &Message) -> Message {
        message.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> Message {
        Message::new(text.to_string())
    }

    #[test]
    fn test_uppercase_lowercase_input() {
        // テスト項目: 小文字が大文字に変換される
        // given (前提条件):
        let transformer = UppercaseTransformer::new();
        let input = message("hello");

        // when (操作):
        let output = transformer.transform(&input);

        // then (期待する結果):
        assert_eq!(output.text(), "HELLO");
    }

    #[test]
    fn test_uppercase_mixed_with_digits() {
        // テスト項目: 大文字・小文字・数字が混在していても数字はそのまま
        let output = UppercaseTransformer.transform(&message("MiXeD123"));

        assert_eq!(output.text(), "MIXED123");
    }

    #[test]
    fn test_uppercase_empty_message() {
        // テスト項目: 空のメッセージは空のまま返される
        let output = UppercaseTransformer.transform(&message(""));

        assert_eq!(output.text(), "");
    }

    #[test]
    fn test_uppercase_leaves_input_untouched() {
        // テスト項目: 入力メッセージは変更されない（新しい Message が返される）
        // given (前提条件):
        let input = message("keep me");

        // when (操作):
        let output = UppercaseTransformer.transform(&input);

        // then (期待する結果):
        assert_eq!(input.text(), "keep me");
        assert_eq!(output.text(), "KEEP ME");
    }

    #[test]
    fn test_uppercase_matches_std_for_ascii() {
        // テスト項目: ASCII 文字列の全パターンで str::to_uppercase と一致する
        // given (前提条件):
        let inputs = [
            "abc",
            "ABC",
            "a1b2c3",
            "  spaced out  ",
            "symbols!@#$%^&*()_+-=[]{};':\",./<>?",
            "tab\tand\nnewline",
        ];

        for s in inputs {
            // when (操作):
            let output = UppercaseTransformer.transform(&message(s));

            // then (期待する結果):
            assert_eq!(output.text(), s.to_uppercase(), "input: {s:?}");
        }

        // 印字可能な ASCII 全体
        let printable: String = (0x20u8..0x7f).map(char::from).collect();
        assert_eq!(
            UppercaseTransformer.transform(&message(&printable)).text(),
            printable.to_uppercase()
        );
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        // テスト項目: 2 回適用しても結果は変わらない
        // given (前提条件):
        let once = UppercaseTransformer.transform(&message("Already Upper? maybe"));

        // when (操作):
        let twice = UppercaseTransformer.transform(&once);

        // then (期待する結果):
        assert_eq!(once, twice);
    }

    #[test]
    fn test_uppercase_unicode() {
        // テスト項目: ロケールに依存しない Unicode の大文字変換が行われる
        assert_eq!(
            UppercaseTransformer.transform(&message("straße")).text(),
            "STRASSE"
        );
        assert_eq!(
            UppercaseTransformer.transform(&message("istanbul")).text(),
            "ISTANBUL"
        );
        assert_eq!(
            UppercaseTransformer.transform(&message("こんにちは")).text(),
            "こんにちは"
        );
    }
}
