//! Application Error - Unified error type for the workspace
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ワークスペース全体で使用する標準エラー型です。
/// 各クレートのエラー（`PowError`, `SigningError`）はこの型に変換されます。
///
/// ## Fields
/// * `kind` - エラーの分類（終了コードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `hint` - ユーザーが取るべき対処（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// // シンプルなエラー
/// let err = AppError::new(ErrorKind::InvalidInput, "Difficulty out of range");
///
/// // 詳細なエラー
/// let err = AppError::config("RSA_KEY_BITS must be a number")
///     .with_hint("Set RSA_KEY_BITS=2048 or leave it unset");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// ユーザーが取るべき対処
    hint: Option<Cow<'static, str>>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - ユーザー向けメッセージ
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 設定エラー
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// 内部エラー
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けの対処を設定
    #[inline]
    pub fn with_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn parse_bits(raw: &str) -> AppResult<usize> {
    ///     raw.parse::<usize>()
    ///         .map_err(|e| AppError::config("Invalid key size").with_source(e))
    /// }
    /// assert!(parse_bits("abc").is_err());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 終了コードを取得
    #[inline]
    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 内部エラーかどうか
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(hint) = &self.hint {
            builder.field("hint", hint);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (Hint: {})", hint)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// `Result<T, E>` を `AppResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T, E> {
    /// エラーを `AppError` に変換し、指定した種別とメッセージでラップ
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}

/// `Option<T>` を `AppResult<T>` に変換するための拡張トレイト
pub trait OptionExt<T> {
    /// `None` の場合に設定エラーを返す
    fn ok_or_config(self, message: impl Into<Cow<'static, str>>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_config(self, message: impl Into<Cow<'static, str>>) -> AppResult<T> {
        self.ok_or_else(|| AppError::config(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::InvalidInput, "Difficulty out of range");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.exit_code(), 64);
        assert_eq!(err.message(), "Difficulty out of range");
        assert_eq!(err.to_string(), "[Invalid Input] Difficulty out of range");
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::internal("test").exit_code(), 70);
        assert_eq!(AppError::config("test").exit_code(), 78);
    }

    #[test]
    fn test_with_hint() {
        let err = AppError::config("Bad key size").with_hint("Use 2048");
        assert!(err.to_string().ends_with("(Hint: Use 2048)"));
    }

    #[test]
    fn test_with_source() {
        let parse_err = "x".parse::<u8>().unwrap_err();
        let err = AppError::config("Invalid number").with_source(parse_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::MalformedInput, "Signature truncated");
        assert_eq!(err.to_string(), "[Malformed Input] Signature truncated");

        let err_with_hint = AppError::config("Bad output").with_hint("Use text or json");
        assert!(err_with_hint.to_string().contains("Hint:"));
    }

    #[test]
    fn test_is_internal() {
        assert!(!AppError::config("test").is_internal());
        assert!(AppError::internal("test").is_internal());
    }

    #[test]
    fn test_result_ext() {
        let result: Result<u8, std::num::ParseIntError> = "300".parse::<u8>();
        let app_result = result.map_app_err(ErrorKind::Config, "Difficulty must fit in u8");
        assert!(app_result.is_err());
        assert_eq!(app_result.unwrap_err().exit_code(), 78);
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_config("POW_LABEL missing");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Config);
    }
}
