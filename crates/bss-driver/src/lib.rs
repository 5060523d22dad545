//! The BSS demo program.
//!
//! A run is one linear pass over zero-initialized storage:
//!
//! 1. read the storage (all zero on a first run)
//! 2. assign `globalVar` and `staticVar`
//! 3. format the message into its 50-byte buffer with a bounded write
//! 4. write one `<label>: <value>` line per entity
//!
//! ```text
//! Global variable: 10
//! Static variable: 20
//! Message: Hello BSS
//! ```

mod config;
mod error;
mod probe;
mod segment;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use probe::{LogProbe, NoopProbe, Probe};
pub use segment::{Message, Segment, Snapshot, GLOBAL_VAR, MESSAGE, MESSAGE_CAPACITY};

use bss_runtime::Formatted;
use log::{debug, warn};
use std::io::Write;

pub const GLOBAL_LABEL: &str = "Global variable";
pub const STATIC_LABEL: &str = "Static variable";
pub const MESSAGE_LABEL: &str = "Message";

/// Runs the demo against one set of storage.
pub struct Demo<'a> {
    segment: Segment<'a>,
    config: DemoConfig,
}

impl Demo<'static> {
    /// Demo over the process-wide statics with the fixed literals.
    pub fn new() -> Self {
        Self::with_segment(Segment::process())
    }
}

impl<'a> Demo<'a> {
    pub fn with_segment(segment: Segment<'a>) -> Self {
        Self {
            segment,
            config: DemoConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DemoConfig) -> Self {
        self.config = config;
        self
    }

    pub fn segment(&self) -> Segment<'a> {
        self.segment
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Run once, logging the storage before and after assignment.
    pub fn run(&self, out: &mut impl Write) -> Result<Report> {
        self.run_with_probe(out, &mut LogProbe)
    }

    /// Run once, handing the storage snapshots to `probe`.
    pub fn run_with_probe(&self, out: &mut impl Write, probe: &mut impl Probe) -> Result<Report> {
        let before = self.segment.snapshot();
        if !before.is_zeroed() {
            warn!("storage already assigned before this run: {before}");
        }
        probe.before_assign(&before);

        self.segment.global_var().set(self.config.global_value);
        self.segment.static_var().set(self.config.static_value);
        let formatted = self
            .segment
            .message()
            .snprintf(format_args!("{}", self.config.message));
        if formatted.truncated() {
            warn!(
                "message truncated to {} of {} bytes (capacity {})",
                formatted.written, formatted.required, MESSAGE_CAPACITY
            );
        }

        let after = self.segment.snapshot();
        probe.after_assign(&after);

        let report = Report {
            before,
            after,
            formatted,
        };
        report.write_to(out)?;
        debug!("report written");

        Ok(report)
    }
}

impl Default for Demo<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// The record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Storage as found on entry.
    pub before: Snapshot,
    /// Storage after assignment; this is what gets printed.
    pub after: Snapshot,
    /// Outcome of the bounded message write.
    pub formatted: Formatted,
}

impl Report {
    /// The output lines, in print order, without line terminators.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{GLOBAL_LABEL}: {}", self.after.global_var),
            format!("{STATIC_LABEL}: {}", self.after.static_var),
            format!("{MESSAGE_LABEL}: {}", self.after.message),
        ]
    }

    /// The full output, each line newline-terminated.
    pub fn render(&self) -> String {
        self.lines().iter().map(|line| format!("{line}\n")).collect()
    }

    fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bss_runtime::{FixedBuf, StaticInt};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        before: Vec<Snapshot>,
        after: Vec<Snapshot>,
    }

    impl Probe for Recorder {
        fn before_assign(&mut self, snapshot: &Snapshot) {
            self.before.push(snapshot.clone());
        }

        fn after_assign(&mut self, snapshot: &Snapshot) {
            self.after.push(snapshot.clone());
        }
    }

    #[test]
    fn test_run_prints_three_lines() {
        static G: StaticInt = StaticInt::zeroed();
        static S: StaticInt = StaticInt::zeroed();
        static M: Mutex<Message> = Mutex::new(FixedBuf::new());

        let demo = Demo::with_segment(Segment::new(&G, &S, &M));
        let mut out = Vec::new();
        demo.run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Global variable: 10\nStatic variable: 20\nMessage: Hello BSS\n"
        );
        assert_eq!(G.get(), 10);
        assert_eq!(S.get(), 20);
    }

    #[test]
    fn test_probe_sees_zero_before_assignment() {
        static G: StaticInt = StaticInt::zeroed();
        static S: StaticInt = StaticInt::zeroed();
        static M: Mutex<Message> = Mutex::new(FixedBuf::new());

        let demo = Demo::with_segment(Segment::new(&G, &S, &M));
        let mut recorder = Recorder::default();
        demo.run_with_probe(&mut std::io::sink(), &mut recorder).unwrap();

        assert_eq!(recorder.before.len(), 1);
        assert!(recorder.before[0].is_zeroed());
        assert_eq!(recorder.after[0].global_var, 10);
        assert_eq!(recorder.after[0].static_var, 20);
        assert_eq!(recorder.after[0].message, "Hello BSS");
    }

    #[test]
    fn test_second_run_finds_assigned_storage() {
        static G: StaticInt = StaticInt::zeroed();
        static S: StaticInt = StaticInt::zeroed();
        static M: Mutex<Message> = Mutex::new(FixedBuf::new());

        let demo = Demo::with_segment(Segment::new(&G, &S, &M));
        let first = demo.run_with_probe(&mut std::io::sink(), &mut NoopProbe).unwrap();
        let second = demo.run_with_probe(&mut std::io::sink(), &mut NoopProbe).unwrap();

        assert!(first.before.is_zeroed());
        assert_eq!(second.before, first.after);
        assert_eq!(second.lines(), first.lines());
    }

    #[test]
    fn test_long_message_is_truncated() {
        static G: StaticInt = StaticInt::zeroed();
        static S: StaticInt = StaticInt::zeroed();
        static M: Mutex<Message> = Mutex::new(FixedBuf::new());

        let config = DemoConfig {
            message: "m".repeat(64),
            ..DemoConfig::default()
        };
        let demo = Demo::with_segment(Segment::new(&G, &S, &M)).with_config(config);
        let report = demo.run_with_probe(&mut std::io::sink(), &mut NoopProbe).unwrap();

        assert!(report.formatted.truncated());
        assert_eq!(report.formatted.required, 64);
        assert_eq!(report.after.message.len(), MESSAGE_CAPACITY - 1);
        assert_eq!(M.lock().unwrap().as_bytes_with_nul().len(), MESSAGE_CAPACITY);
    }

    #[test]
    fn test_output_failure_is_surfaced() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        static G: StaticInt = StaticInt::zeroed();
        static S: StaticInt = StaticInt::zeroed();
        static M: Mutex<Message> = Mutex::new(FixedBuf::new());

        let demo = Demo::with_segment(Segment::new(&G, &S, &M));
        let err = demo.run(&mut Closed).unwrap_err();

        match err {
            DemoError::Output(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        }
        // Assignment still happened; only the print failed
        assert_eq!(G.get(), 10);
    }
}
