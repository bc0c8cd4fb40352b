// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sidepanel::model::Timestamp;
use sidepanel::store::SessionFile;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("sidepanel-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn seeded_store(tmp: &TempDir, questions: usize) -> SessionFile {
    let store = SessionFile::new(tmp.path().join("conference_data.json"));
    let submitted_at = Timestamp::new("2024-05-01 09:30:00").expect("timestamp");
    for i in 0..questions {
        store.add_question(format!("question {i}"), submitted_at.clone()).expect("add_question");
    }
    store
}

// Benchmark identity (keep stable):
// - Group name in this file: `store.session_file`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `lazy_create`, `load_50`).
fn benches_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.session_file");

    group.bench_function("lazy_create", |b| {
        b.iter_batched_ref(
            || TempDir::new("store_lazy_create"),
            |tmp| {
                let store = SessionFile::new(tmp.path().join("conference_data.json"));
                black_box(store.load().expect("load"))
            },
            BatchSize::SmallInput,
        )
    });

    let load_tmp = TempDir::new("store_load_50");
    let load_store = seeded_store(&load_tmp, 50);
    group.bench_function("load_50", move |b| {
        b.iter(|| black_box(load_store.load().expect("load")))
    });

    let submitted_at = Timestamp::new("2024-05-01 09:30:00").expect("timestamp");
    group.bench_function("append_to_50", move |b| {
        b.iter_batched_ref(
            || {
                let tmp = TempDir::new("store_append_to_50");
                let store = seeded_store(&tmp, 50);
                (tmp, store)
            },
            |(_tmp, store)| {
                store.add_question("one more", submitted_at.clone()).expect("add_question")
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benches_store);
criterion_main!(benches);
