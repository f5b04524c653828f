// Copyright 2024 Aleo Network Foundation
// This file is part of the polydfs library.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Nested wall-clock timers for hot paths.
//!
//! With the `print-trace` feature, `start_timer!` and `end_timer!` report through
//! `tracing` at the `INFO` level, indented by nesting depth. Without it, both
//! macros compile to nothing.

#![allow(unused_imports)]
pub use inner::*;

#[cfg(feature = "print-trace")]
#[macro_use]
pub mod inner {
    use std::{
        sync::atomic::AtomicUsize,
        time::{Duration, Instant},
    };

    pub use tracing;

    pub static NUM_INDENT: AtomicUsize = AtomicUsize::new(0);
    pub const PAD_CHAR: &str = "·";

    pub struct TimerInfo {
        pub msg: String,
        pub time: Instant,
    }

    #[macro_export]
    macro_rules! start_timer {
        ($msg:expr) => {{
            use std::{sync::atomic::Ordering, time::Instant};
            use $crate::{compute_indent, NUM_INDENT};

            let msg = $msg();
            let indent = compute_indent(2 * NUM_INDENT.fetch_add(1, Ordering::Relaxed));
            $crate::tracing::info!("{}{:8} {}", indent, "Start:", msg);

            $crate::TimerInfo {
                msg: msg.to_string(),
                time: Instant::now(),
            }
        }};
    }

    #[macro_export]
    macro_rules! end_timer {
        ($time:expr) => {{
            $crate::end_timer!($time, || "");
        }};
        ($time:expr, $msg:expr) => {{
            use std::sync::atomic::Ordering;
            use $crate::{compute_indent, format_elapsed, NUM_INDENT};

            let final_time = format_elapsed($time.time.elapsed());
            let message = format!("{} {}", $time.msg, $msg());

            let indent_amount = 2 * NUM_INDENT.fetch_sub(1, Ordering::Relaxed).saturating_sub(1);
            let indent = compute_indent(indent_amount);

            $crate::tracing::info!(
                "{}{:8} {:.<pad$}{}",
                indent,
                "End:",
                message,
                final_time,
                pad = 75usize.saturating_sub(indent_amount)
            );
        }};
    }

    pub fn compute_indent(indent_amount: usize) -> String {
        PAD_CHAR.repeat(indent_amount)
    }

    /// Renders a duration with the largest unit that keeps it above one.
    pub fn format_elapsed(elapsed: Duration) -> String {
        let secs = elapsed.as_secs();
        let millis = elapsed.subsec_millis();
        let micros = elapsed.subsec_micros() % 1000;
        let nanos = elapsed.subsec_nanos() % 1000;
        if secs != 0 {
            format!("{}.{:03}s", secs, millis)
        } else if millis > 0 {
            format!("{}.{:03}ms", millis, micros)
        } else if micros > 0 {
            format!("{}.{:03}µs", micros, nanos)
        } else {
            format!("{}ns", elapsed.subsec_nanos())
        }
    }
}

#[cfg(not(feature = "print-trace"))]
#[macro_use]
mod inner {
    pub struct TimerInfo;

    #[macro_export]
    macro_rules! start_timer {
        ($msg:expr) => {
            $crate::TimerInfo
        };
    }

    #[macro_export]
    macro_rules! end_timer {
        ($time:expr, $msg:expr) => {
            let _ = $msg;
            let _ = $time;
        };
        ($time:expr) => {
            let _ = $time;
        };
    }
}
