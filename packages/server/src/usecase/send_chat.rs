//! UseCase: チャットメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendChatUseCase::execute() メソッド
//! - 注入された MessageTransformer への委譲
//!
//! ### なぜこのテストが必要か
//! - UseCase が Transformer を 1 回だけ呼び出し、その結果をそのまま返すことを保証
//! - 具体的な変換（大文字化）と組み合わせたときの結果を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：通常のメッセージの変換
//! - エッジケース：空のメッセージ

use std::sync::Arc;

use crate::domain::{Message, MessageTransformer};

/// チャットメッセージ送信のユースケース
pub struct SendChatUseCase {
    /// Transformer（変換処理の抽象化）
    transformer: Arc<dyn MessageTransformer>,
}

impl SendChatUseCase {
    /// 新しい SendChatUseCase を作成
    pub fn new(transformer: Arc<dyn MessageTransformer>) -> Self {
        Self { transformer }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 受信したメッセージ（Domain Model）
    ///
    /// # Returns
    ///
    /// 変換後の新しいメッセージ
    pub fn execute(&self, message: Message) -> Message {
        let reply = self.transformer.transform(&message);
        tracing::debug!(
            "Transformed message ({} -> {} chars)",
            message.text().chars().count(),
            reply.text().chars().count()
        );
        reply
    }
}
