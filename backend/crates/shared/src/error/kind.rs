//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to process exit codes.

/// エラー種別の列挙体
///
/// 探索・署名処理で発生するエラーの分類を定義します。
/// 各バリアントは BSD `sysexits.h` に準拠した終了コードにマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
/// * 署名の不一致はエラーではありません（`false` として返される）
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::MalformedInput;
/// assert_eq!(kind.exit_code(), 65);
/// assert_eq!(kind.as_str(), "Malformed Input");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 64 - Invalid Input: 呼び出し側の引数が不正（難易度の範囲外など）
    InvalidInput,
    /// 65 - Malformed Input: 鍵・署名のエンコードが壊れている
    MalformedInput,
    /// 78 - Config: 設定値が不正
    Config,
    /// 130 - Cancelled: 呼び出し側が明示的に中断した
    Cancelled,
    /// 70 - Internal: 暗号ライブラリ内部の失敗など
    Internal,
}

impl ErrorKind {
    /// プロセス終了コードを取得
    ///
    /// ## Returns
    /// `sysexits.h` に準拠した終了コード（中断は `128 + SIGINT`）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.exit_code(), 64);
    /// assert_eq!(ErrorKind::Internal.exit_code(), 70);
    /// ```
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::InvalidInput => 64,
            ErrorKind::MalformedInput => 65,
            ErrorKind::Internal => 70,
            ErrorKind::Config => 78,
            ErrorKind::Cancelled => 130,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Cancelled.as_str(), "Cancelled");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::MalformedInput => "Malformed Input",
            ErrorKind::Config => "Configuration Error",
            ErrorKind::Cancelled => "Cancelled",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// 内部エラーかどうかを判定
    ///
    /// 呼び出し側の入力に起因しないエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
