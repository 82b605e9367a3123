//! Console progress rendering
//!
//! Subscribes to the transformer's broadcast channel and draws a single
//! updating status line per phase.

use std::io::{IsTerminal, Write};

use console::style;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::transform::{ProgressEvent, ProgressTracker};

const BAR_WIDTH: usize = 30;

/// Console progress renderer
pub struct ConsoleRenderer {
    tracker: ProgressTracker,
    show_items: bool,
}

impl ConsoleRenderer {
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            tracker,
            show_items: true,
        }
    }

    pub fn with_items(mut self, show: bool) -> Self {
        self.show_items = show;
        self
    }

    /// Render one event as a status line; `None` for events with no line
    pub fn render(&self, event: &ProgressEvent) -> Option<String> {
        match event {
            ProgressEvent::PhaseStarted { phase, total_items } => Some(format!(
                "{} {} {}/{}",
                style(phase).cyan().bold(),
                render_progress_bar(0, *total_items, BAR_WIDTH),
                0,
                total_items
            )),
            ProgressEvent::ItemProgress {
                completed,
                total,
                current_item,
            } => {
                let phase = self
                    .tracker
                    .state()
                    .phase
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                let item = if self.show_items {
                    format!("  {}", style(current_item).dim())
                } else {
                    String::new()
                };
                Some(format!(
                    "{} {} {}/{}{}",
                    style(phase).cyan().bold(),
                    render_progress_bar(*completed, *total, BAR_WIDTH),
                    completed,
                    total,
                    item
                ))
            }
            ProgressEvent::Error { item, error } => Some(format!(
                "{} {}: {}",
                style("✗").red(),
                item,
                error
            )),
            ProgressEvent::Finished {
                success,
                duration_ms,
                summary,
            } => {
                let icon = if *success {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                Some(format!(
                    "{} {} ({})",
                    icon,
                    summary,
                    format_duration(*duration_ms)
                ))
            }
        }
    }

    /// Start rendering events until the tracker finishes
    pub fn start_render_loop(self) -> JoinHandle<()> {
        let receiver = self.tracker.subscribe();
        tokio::spawn(async move { self.drain(receiver).await })
    }

    async fn drain(self, mut receiver: broadcast::Receiver<ProgressEvent>) {
        let interactive = std::io::stdout().is_terminal();
        loop {
            let event = match receiver.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Progress renderer lagged");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let Some(line) = self.render(&event) else {
                continue;
            };
            match &event {
                // Errors and the summary stay on screen
                ProgressEvent::Error { .. } | ProgressEvent::Finished { .. } => {
                    if interactive {
                        print!("\r\x1B[K");
                    }
                    println!("{}", line);
                }
                _ if interactive => {
                    print!("\r\x1B[K{}", line);
                    let _ = std::io::stdout().flush();
                }
                _ => {}
            }
            if matches!(event, ProgressEvent::Finished { .. }) {
                break;
            }
        }
    }
}

/// Render a simple progress bar
fn render_progress_bar(completed: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return format!("[{}]", " ".repeat(width));
    }

    let progress = (completed as f32 / total as f32).min(1.0);
    let filled = (progress * width as f32) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format a duration in milliseconds as a human-readable string
fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    if secs == 0 {
        format!("{}ms", ms)
    } else if secs < 60 {
        format!("{}.{}s", secs, (ms % 1000) / 100)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Phase;

    #[test]
    fn test_progress_bar_render() {
        assert_eq!(render_progress_bar(0, 10, 10), "[░░░░░░░░░░]");
        assert_eq!(render_progress_bar(5, 10, 10), "[█████░░░░░]");
        assert_eq!(render_progress_bar(10, 10, 10), "[██████████]");
        assert_eq!(render_progress_bar(3, 0, 4), "[    ]");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(250), "250ms");
        assert_eq!(format_duration(1500), "1.5s");
        assert_eq!(format_duration(90_000), "1m 30s");
    }

    #[test]
    fn test_render_item_line() {
        let tracker = ProgressTracker::new();
        tracker.start();
        tracker.start_phase(Phase::Transform, 4);
        let renderer = ConsoleRenderer::new(tracker).with_items(false);

        let line = renderer
            .render(&ProgressEvent::ItemProgress {
                completed: 2,
                total: 4,
                current_item: "src/App.tsx".into(),
            })
            .unwrap();
        assert!(line.contains("2/4"));
        assert!(!line.contains("App.tsx"));
    }

    #[tokio::test]
    async fn test_render_loop_stops_on_finish() {
        let tracker = ProgressTracker::new();
        let handle = ConsoleRenderer::new(tracker.clone()).start_render_loop();
        tracker.start();
        tracker.start_phase(Phase::Write, 1);
        tracker.advance("a.html");
        tracker.finish(true, "done");
        handle.await.unwrap();
    }
}
