use criterion::{black_box, criterion_group, criterion_main, Criterion};
use er_engine::{
    is_step_active, Control, ControlConfig, GateOutput, GridDisplay, PresetStore, Timer, TimerId,
    TimerMode,
};
use er_ir::{Brightness, Channel, EventKind, PresetData, PresetMeta, SharedData, MAX_STEPS};

/// Platform that accepts every call and keeps nothing.
struct NullPlatform;

impl GridDisplay for NullPlatform {
    fn is_connected(&self) -> bool {
        true
    }
    fn clear_all(&mut self) {}
    fn set_led(&mut self, x: u8, y: u8, brightness: Brightness) {
        black_box((x, y, brightness));
    }
}

impl GateOutput for NullPlatform {
    fn set_gate(&mut self, channel: u8, on: bool) {
        black_box((channel, on));
    }
}

impl Timer for NullPlatform {
    fn schedule(&mut self, id: TimerId, delay_ms: u16, mode: TimerMode) {
        black_box((id, delay_ms, mode));
    }
}

impl PresetStore for NullPlatform {
    fn preset_count(&self) -> u8 {
        1
    }
    fn load_preset(&mut self, _index: u8) -> Option<PresetData> {
        let mut data = PresetData::default();
        for (i, ch) in data.patterns[0].channels.iter_mut().enumerate() {
            *ch = Channel::new(16 - i as u8, 5 + i as u8, i as u8);
        }
        Some(data)
    }
    fn load_preset_meta(&mut self, _index: u8) -> Option<PresetMeta> {
        None
    }
    fn store_preset(&mut self, _index: u8, _meta: &PresetMeta, _preset: &PresetData) {}
    fn load_shared(&mut self) -> Option<SharedData> {
        None
    }
    fn store_shared(&mut self, _shared: &SharedData) {}
    fn preset_index(&self) -> u8 {
        0
    }
    fn store_preset_index(&mut self, _index: u8) {}
}

fn bench_generator(c: &mut Criterion) {
    c.bench_function("is_step_active all pairs", |b| {
        b.iter(|| {
            let mut count = 0u32;
            for steps in 1..=MAX_STEPS {
                for fill in 0..=steps {
                    for p in 0..steps {
                        count += is_step_active(black_box(fill), black_box(steps), p) as u32;
                    }
                }
            }
            count
        })
    });
}

fn bench_control(c: &mut Criterion) {
    let mut ctrl = Control::new(NullPlatform, ControlConfig::default());
    ctrl.init_control();

    c.bench_function("clock tick + render", |b| {
        b.iter(|| ctrl.process_event(EventKind::MainClockReceived as u8, black_box(&[1, 1])))
    });

    c.bench_function("render grid", |b| b.iter(|| ctrl.render_grid()));

    c.bench_function("grid key select", |b| {
        b.iter(|| ctrl.process_event(EventKind::GridKeyPressed as u8, black_box(&[5, 1, 1])))
    });
}

criterion_group!(benches, bench_generator, bench_control);
criterion_main!(benches);
