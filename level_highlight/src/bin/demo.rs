use level_highlight::{HighlightFormat, Level};

fn main() {
    // Демонстрация подсветки уровней в консоли: 100 логов подряд.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .event_format(HighlightFormat::new())
        .init();

    println!("--- level_highlight demo (100 логов) ---");
    print_stream(100);
}

fn print_stream(total: usize) {
    for idx in 0..total {
        let level = Level::ALL[idx % Level::ALL.len()];
        let msg = message_for(level, idx);
        let topic = format!("topic-{}", idx % 7);
        let dur_ms = 5 + idx % 25;

        match level {
            Level::Trace => tracing::trace!(iteration = idx, %topic, "{msg}"),
            Level::Debug => tracing::debug!(iteration = idx, dur_ms, "{msg}"),
            Level::Info => tracing::info!(iteration = idx, dur_ms, %topic, "{msg}"),
            Level::Warn => tracing::warn!(iteration = idx, retry = 1 + idx % 5, "{msg}"),
            Level::Error => tracing::error!(iteration = idx, code = "E500", "{msg}"),
        }
    }
}

fn message_for(level: Level, idx: usize) -> String {
    let color = match level {
        Level::Trace => "голубой",
        Level::Debug => "синий",
        Level::Info => "зелёный",
        Level::Warn => "красный",
        Level::Error => "жирный красный",
    };
    format!("#{idx} {} ({color}, код {})", level, level_highlight::resolve(level).as_str())
}
