//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that classifies failures by recovery policy.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 対話型アプリケーションで発生するエラーの分類を定義します。
/// ネットワーク境界を持たないため、各バリアントはステータスコードではなく
/// 「呼び出し元がどう回復すべきか」にマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.as_str(), "Not Found");
/// assert!(kind.is_rejection());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値の検証に失敗（再入力で回復可能）
    Validation,
    /// 参照されたリソースが見つからない
    NotFound,
    /// 現在の状態と競合する操作
    Conflict,
    /// 事前条件の違反（設定やカタログの不備、起動時に致命的となり得る）
    FailedPrecondition,
    /// 上限に達したため拒否（延長回数など、再試行しても回復しない）
    Exhausted,
    /// 期限切れのリソースへの操作
    Expired,
    /// 内部エラー（バグまたは想定外の状態）
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Validation.as_str(), "Validation");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::FailedPrecondition => "Failed Precondition",
            ErrorKind::Exhausted => "Exhausted",
            ErrorKind::Expired => "Expired",
            ErrorKind::Internal => "Internal",
        }
    }

    /// 呼び出し側の操作ミスとして拒否されたエラーかどうかを判定
    ///
    /// 拒否系エラーは呼び出し元に返すだけで回復し、プロセスを止めません。
    #[inline]
    pub const fn is_rejection(&self) -> bool {
        !self.is_fault()
    }

    /// プログラム側の欠陥・想定外の状態かどうかを判定
    ///
    /// `true` のエラーはログに記録すべきです。
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
