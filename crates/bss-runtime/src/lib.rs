//! Storage primitives for the BSS demo.
//!
//! Variables with static storage duration and no explicit initializer end up
//! in the zero-initialized data segment (`.bss`). The loader maps that segment
//! as zero pages, so everything placed there reads as zero before the first
//! line of `main` runs.
//!
//! This crate provides the two kinds of storage the demo needs, both
//! constructible in a `const` context with an all-zero bit pattern:
//!
//! - [`StaticInt`]: a 32-bit signed integer cell for `static` items
//! - [`FixedBuf`]: a fixed-capacity text buffer written with `snprintf`
//!   semantics (bounded, truncating, always terminated)
//!
//! # Example
//!
//! ```
//! use bss_runtime::{FixedBuf, StaticInt};
//!
//! static COUNTER: StaticInt = StaticInt::zeroed();
//!
//! assert!(COUNTER.is_zero());
//! COUNTER.set(10);
//! assert_eq!(COUNTER.get(), 10);
//!
//! let mut buf = FixedBuf::<8>::new();
//! let out = buf.snprintf(format_args!("Hello {}", "BSS"));
//! assert_eq!(buf.as_str(), "Hello B");
//! assert_eq!(out.required, 9);
//! assert!(out.truncated());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod memory;
mod stdio;

pub use memory::StaticInt;
pub use stdio::{FixedBuf, Formatted};
