use std::fmt::{self, Write as _};

use chrono::Utc;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use crate::colorscheme::{self, ColorResolver};
use crate::Level;

/// Формат timestamp в строке лога.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m%d.%H:%M:%S";

/// Форматтер событий `tracing` с подсветкой уровня.
///
/// Строка имеет вид `2025.1205.10:15:30 INFO  app::db: message key=value`,
/// где уровень окрашен кодом, который вернул резолвер.
#[derive(Debug, Clone, Copy)]
pub struct HighlightFormat {
    resolver: ColorResolver,
    ansi: bool,
    timestamp: bool,
    target: bool,
}

impl Default for HighlightFormat {
    fn default() -> Self {
        Self {
            resolver: colorscheme::highlight,
            ansi: true,
            timestamp: true,
            target: true,
        }
    }
}

impl HighlightFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить палитру (по умолчанию `colorscheme::highlight`).
    pub fn with_resolver(mut self, resolver: ColorResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Включить/выключить цветовое форматирование ANSI.
    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.target = enabled;
        self
    }

    /// Записать метку уровня, при необходимости окрашенную.
    fn write_level(&self, writer: &mut Writer<'_>, level: Level) -> fmt::Result {
        let label = format!("{:<5}", level);
        if self.ansi && writer.has_ansi_escapes() {
            writer.write_str(&(self.resolver)(Some(level)).paint(&label))
        } else {
            writer.write_str(&label)
        }
    }
}

impl<S, N> FormatEvent<S, N> for HighlightFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if self.timestamp {
            write!(writer, "{} ", Utc::now().format(TIMESTAMP_FORMAT))?;
        }

        self.write_level(&mut writer, Level::from(meta.level()))?;

        if self.target {
            write!(writer, " {}:", meta.target())?;
        }
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
