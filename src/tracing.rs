//! Logging setup and update-loop diagnostics
//!
//! Two outputs are installed by [`init`]:
//! - stderr, filtered by `RUST_LOG` (default `warn`)
//! - `~/.config/tagfield/logs/tagfield.log`, rotated daily, at `debug`
//!
//! Useful filters:
//! - `RUST_LOG=surface=debug,message=debug` - every message and the surface
//!   change it caused (debug builds only)
//! - `RUST_LOG=tagfield::widget=trace` - widget mount/destroy
//! - `RUST_LOG=tagfield::update=trace` - reentrancy and read-back decisions

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EditorModel, Phase};

const LOG_FILE: &str = "tagfield.log";

/// Install the global subscriber. A second call keeps the first one and warns.
pub fn init() {
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(stderr_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    if let Err(e) = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: tracing already initialized: {}", e);
    }
}

/// What one `update` call can change, captured before and after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub phase: Phase,
    pub node_count: usize,
    pub live_widgets: usize,
    pub render_count: u64,
    pub caret: usize,
    pub serialized: String,
}

impl SurfaceSnapshot {
    pub fn from_model(model: &EditorModel) -> Self {
        Self {
            phase: model.phase(),
            node_count: model.surface.len(),
            live_widgets: model.widgets.live_count(),
            render_count: model.render_count(),
            caret: model.surface.caret().0,
            serialized: model.surface.serialize(),
        }
    }

    /// Human-readable summary of what changed, or `None`
    pub fn diff(&self, other: &SurfaceSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.phase != other.phase {
            changes.push(format!("phase: {:?} → {:?}", self.phase, other.phase));
        }
        if self.render_count != other.render_count {
            changes.push(format!(
                "render #{} ({} → {} widgets)",
                other.render_count, self.live_widgets, other.live_widgets
            ));
        } else if self.live_widgets != other.live_widgets {
            changes.push(format!(
                "widgets: {} → {}",
                self.live_widgets, other.live_widgets
            ));
        }
        if self.node_count != other.node_count {
            changes.push(format!("nodes: {} → {}", self.node_count, other.node_count));
        }
        if self.serialized != other.serialized {
            changes.push(format!("surface: {:?} → {:?}", self.serialized, other.serialized));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
