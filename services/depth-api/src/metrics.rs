//! Application metrics collection and reporting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for the depth raster API.
#[derive(Debug)]
pub struct MetricsCollector {
    /// Request counts
    pub process_requests: AtomicU64,
    pub frame_requests: AtomicU64,

    /// Render stats
    pub frames_rendered: AtomicU64,
    pub render_errors: AtomicU64,

    /// Start time for uptime calculation
    start_time: Instant,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            process_requests: AtomicU64::new(0),
            frame_requests: AtomicU64::new(0),
            frames_rendered: AtomicU64::new(0),
            render_errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a /process_image request
    pub fn record_process_request(&self) {
        self.process_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a /get_frames request
    pub fn record_frame_request(&self) {
        self.frame_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of a frame render
    pub fn record_render(&self, success: bool) {
        if success {
            self.frames_rendered.fetch_add(1, Ordering::Relaxed);
        } else {
            self.render_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# HELP process_requests_total Total /process_image requests\n# TYPE process_requests_total counter\nprocess_requests_total {}\n",
            self.process_requests.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP frame_requests_total Total /get_frames requests\n# TYPE frame_requests_total counter\nframe_requests_total {}\n",
            self.frame_requests.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP frames_rendered_total Total successful frame renders\n# TYPE frames_rendered_total counter\nframes_rendered_total {}\n",
            self.frames_rendered.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP render_errors_total Total failed frame renders\n# TYPE render_errors_total counter\nrender_errors_total {}\n",
            self.render_errors.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP uptime_seconds Service uptime in seconds\n# TYPE uptime_seconds gauge\nuptime_seconds {}\n",
            self.uptime_secs()
        ));

        output
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
