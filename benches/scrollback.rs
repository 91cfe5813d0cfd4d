//! Scrollback and run-encoding performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termsurface::{
    Cell, CellRun, EngineEvents, KeyCode, KeyModifiers, MouseButton, Rgb, RunEncoder,
    ScreenEngine, ScrollbackBuffer, Style,
};

/// Minimal engine: one repeated live row, enough for encoder benchmarks.
struct RowEngine {
    row: Vec<Cell>,
}

impl RowEngine {
    fn new(cols: usize) -> Self {
        Self {
            row: "the quick brown fox jumps over the lazy dog "
                .chars()
                .cycle()
                .take(cols)
                .map(|ch| Cell::new(ch, Style::default()))
                .collect(),
        }
    }
}

impl ScreenEngine for RowEngine {
    fn write_input(&mut self, bytes: &[u8], _events: &mut dyn EngineEvents) -> usize {
        bytes.len()
    }

    fn set_size(&mut self, _rows: u16, _cols: u16, _events: &mut dyn EngineEvents) {}

    fn cell(&self, _row: u16, col: u16) -> Cell {
        self.row.get(col as usize).copied().unwrap_or_default()
    }

    fn palette_color(&self, index: u8) -> Rgb {
        Rgb::new(index, index, index)
    }

    fn default_colors(&self) -> (Rgb, Rgb) {
        (Rgb::WHITE, Rgb::BLACK)
    }

    fn set_default_colors(&mut self, _fg: Rgb, _bg: Rgb) {}

    fn key(&mut self, _key: KeyCode, _mods: KeyModifiers, _events: &mut dyn EngineEvents) -> bool {
        false
    }

    fn character(&mut self, _ch: char, _mods: KeyModifiers, _events: &mut dyn EngineEvents) -> bool {
        false
    }

    fn mouse_move(
        &mut self,
        _row: u16,
        _col: u16,
        _mods: KeyModifiers,
        _events: &mut dyn EngineEvents,
    ) {
    }

    fn mouse_button(
        &mut self,
        _button: MouseButton,
        _pressed: bool,
        _mods: KeyModifiers,
        _events: &mut dyn EngineEvents,
    ) {
    }
}

fn row(cols: usize) -> Vec<Cell> {
    (0..cols)
        .map(|i| Cell::new(char::from(b'a' + (i % 26) as u8), Style::default()))
        .collect()
}

fn scrollback_push(c: &mut Criterion) {
    let line = row(80);

    c.bench_function("scrollback_push_under_capacity", |b| {
        b.iter_batched(
            || ScrollbackBuffer::new(2048),
            |mut sb| {
                for _ in 0..1000 {
                    sb.push(black_box(&line));
                }
                sb
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("scrollback_push_recycling", |b| {
        // Buffer already full of same-width lines: every push evicts and
        // recycles.
        let mut sb = ScrollbackBuffer::new(1000);
        for _ in 0..1000 {
            sb.push(&line);
        }
        b.iter(|| sb.push(black_box(&line)));
    });
}

fn scrollback_pop(c: &mut Criterion) {
    let line = row(80);

    c.bench_function("scrollback_push_pop_cycle", |b| {
        let mut sb = ScrollbackBuffer::new(64);
        let mut out = vec![Cell::default(); 80];
        b.iter(|| {
            sb.push(black_box(&line));
            sb.pop(black_box(&mut out))
        });
    });
}

fn encode_run(c: &mut Criterion) {
    let engine = RowEngine::new(200);
    let sb = ScrollbackBuffer::new(64);
    let encoder = RunEncoder::new(&sb, &engine, 50, 200);
    let mut run = CellRun::with_capacity(200);

    c.bench_function("encode_run_uniform_200_cols", |b| {
        b.iter(|| {
            encoder.encode(black_box(0), black_box(0), &mut run);
            run.len()
        });
    });
}

criterion_group!(benches, scrollback_push, scrollback_pop, encode_run);
criterion_main!(benches);
