// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Criterion with a flamegraph profiler; sampling is tunable through `PROFILE_FREQ`,
/// `BENCH_SAMPLE_SIZE`, `BENCH_WARMUP_SECS` and `BENCH_MEASUREMENT_SECS`.
pub fn criterion() -> Criterion {
    let frequency = env_or::<i32>("PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size = env_or::<usize>("BENCH_SAMPLE_SIZE", 50).clamp(10, 200);
    let warmup_secs = env_or::<u64>("BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs = env_or::<u64>("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
