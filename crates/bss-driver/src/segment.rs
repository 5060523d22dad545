//! The demo's zero-initialized storage.
//!
//! Every item here is a `static` with an all-zero initializer and no other
//! setup, which is the Rust equivalent of a C global declared without an
//! initializer: it is emitted into `.bss` and reads as zero until assigned.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bss_runtime::{FixedBuf, StaticInt};

/// Declared size of the message buffer, terminator included.
pub const MESSAGE_CAPACITY: usize = 50;

/// The message buffer type.
pub type Message = FixedBuf<MESSAGE_CAPACITY>;

/// `globalVar`: file-scope storage.
pub static GLOBAL_VAR: StaticInt = StaticInt::zeroed();

/// `message`: file-scope buffer.
pub static MESSAGE: Mutex<Message> = Mutex::new(FixedBuf::new());

/// Borrowed view over one set of demo storage.
///
/// [`Segment::process`] points at the process-wide statics. Tests build their
/// own with [`Segment::new`] over fresh `static` items so they can observe
/// the zero state regardless of what other tests already ran.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    global_var: &'a StaticInt,
    static_var: &'a StaticInt,
    message: &'a Mutex<Message>,
}

impl Segment<'static> {
    /// The process-wide storage.
    pub fn process() -> Self {
        // `staticVar`: function-scope storage with static duration. Same cell
        // on every call, zero until first assigned.
        static STATIC_VAR: StaticInt = StaticInt::zeroed();

        Self::new(&GLOBAL_VAR, &STATIC_VAR, &MESSAGE)
    }
}

impl<'a> Segment<'a> {
    pub fn new(
        global_var: &'a StaticInt,
        static_var: &'a StaticInt,
        message: &'a Mutex<Message>,
    ) -> Self {
        Self {
            global_var,
            static_var,
            message,
        }
    }

    pub fn global_var(&self) -> &'a StaticInt {
        self.global_var
    }

    pub fn static_var(&self) -> &'a StaticInt {
        self.static_var
    }

    /// Lock the message buffer.
    ///
    /// A poisoned lock is recovered: the buffer is plain bytes and stays
    /// structurally valid whatever the panicking holder was doing.
    pub fn message(&self) -> MutexGuard<'a, Message> {
        self.message.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True if nothing has been assigned yet.
    pub fn is_zeroed(&self) -> bool {
        self.global_var.is_zero() && self.static_var.is_zero() && self.message().is_zeroed()
    }

    /// Read all three entities.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            global_var: self.global_var.get(),
            static_var: self.static_var.get(),
            message: self.message().as_str().to_string(),
        }
    }
}

/// Values of the three entities at one point in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub global_var: i32,
    pub static_var: i32,
    pub message: String,
}

impl Snapshot {
    pub fn is_zeroed(&self) -> bool {
        self.global_var == 0 && self.static_var == 0 && self.message.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "globalVar={} staticVar={} message={:?}",
            self.global_var, self.static_var, self.message
        )
    }
}
