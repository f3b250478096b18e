/// Уровень логирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Числовые коды уровней (совместимы с logback).
    pub const ERROR_INT: i32 = 40_000;
    pub const WARN_INT: i32 = 30_000;
    pub const INFO_INT: i32 = 20_000;
    pub const DEBUG_INT: i32 = 10_000;
    pub const TRACE_INT: i32 = 5_000;

    /// Все уровни от самого подробного к самому важному.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Представление уровня в виде строки (`TRACE|DEBUG|INFO|WARN|ERROR`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Числовой код уровня.
    pub fn code(&self) -> i32 {
        match self {
            Level::Trace => Self::TRACE_INT,
            Level::Debug => Self::DEBUG_INT,
            Level::Info => Self::INFO_INT,
            Level::Warn => Self::WARN_INT,
            Level::Error => Self::ERROR_INT,
        }
    }

    /// Разбор уровня из строки (`trace|debug|info|warn|error`, регистронезависимо).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }

    /// Уровень по числовому коду. `OFF`, `ALL` и прочие коды дают `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::ERROR_INT => Some(Level::Error),
            Self::WARN_INT => Some(Level::Warn),
            Self::INFO_INT => Some(Level::Info),
            Self::DEBUG_INT => Some(Level::Debug),
            Self::TRACE_INT => Some(Level::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        Level::from(*level)
    }
}
