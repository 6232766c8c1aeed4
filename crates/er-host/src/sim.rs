//! Clock-driven simulation of the sequencer on the host platform.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use er_engine::Control;
use er_ir::ControlEvent;
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::HeapRb;
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::display::TextGrid;
use crate::flash::MemoryFlash;
use crate::platform::HostPlatform;

/// Events buffered between the clock thread and the dispatch loop.
const EVENT_QUEUE_LEN: usize = 64;

/// Owns a controller on the host platform and feeds it clock pulses.
pub struct Simulator {
    control: Control<HostPlatform>,
    config: SimConfig,
}

impl Simulator {
    /// Boot a controller on blank flash: write default presets, then load them.
    pub fn new(config: SimConfig) -> Self {
        let flash = MemoryFlash::new(config.preset_count);
        let grid = TextGrid::new(config.grid_width, config.grid_height);
        Self::with_platform(config, HostPlatform::new(grid, flash))
    }

    /// Boot a controller on an existing platform, initialising flash only if blank.
    pub fn with_platform(config: SimConfig, platform: HostPlatform) -> Self {
        let blank = platform.flash.is_blank();
        let mut control = Control::new(platform, config.control_config());
        if blank {
            control.init_presets();
        }
        control.init_control();
        Self { control, config }
    }

    pub fn control(&self) -> &Control<HostPlatform> {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control<HostPlatform> {
        &mut self.control
    }

    pub fn platform(&self) -> &HostPlatform {
        self.control.platform()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.platform().now_ms()
    }

    /// Current grid frame as text.
    pub fn frame(&self) -> String {
        self.platform().grid.frame()
    }

    /// Move the clock to `time_ms`, firing every timer due on the way in deadline order.
    pub fn advance_to(&mut self, time_ms: u64) {
        while let Some(deadline) = self.platform().next_timer() {
            if deadline > time_ms {
                break;
            }
            let platform = self.control.platform_mut();
            platform.set_time(deadline.max(platform.now_ms()));
            let Some(id) = platform.pop_due_timer() else {
                break;
            };
            self.control.handle_event(&ControlEvent::Timed { id: id.0 });
        }
        let platform = self.control.platform_mut();
        platform.set_time(time_ms.max(platform.now_ms()));
    }

    /// Deliver an event at `time_ms` after firing earlier timers.
    pub fn dispatch_at(&mut self, time_ms: u64, event: &ControlEvent) {
        self.advance_to(time_ms);
        self.control.handle_event(event);
    }

    /// Press and release a grid key at the current time.
    pub fn press(&mut self, x: u8, y: u8) {
        let now = self.now_ms();
        self.dispatch_at(now, &ControlEvent::GridKey { x, y, pressed: true });
        self.dispatch_at(now, &ControlEvent::GridKey { x, y, pressed: false });
    }

    /// Run one clock period: rising edge now, falling edge half a period later.
    pub fn step(&mut self) {
        let start = self.now_ms();
        let period = self.config.tick_interval_ms();
        self.dispatch_at(start, &ControlEvent::MainClock { external: true, phase: true });
        self.dispatch_at(start + period / 2, &ControlEvent::MainClock { external: true, phase: false });
        self.advance_to(start + period);
    }

    /// Run `ticks` clock periods on a simulated timeline.
    pub fn run_offline(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.step();
        }
        debug!(ticks, now_ms = self.now_ms(), "offline run finished");
    }

    /// Run `ticks` clock periods in wall-clock time.
    ///
    /// A clock thread produces pulses into a ring buffer; this thread is the
    /// only consumer and the only caller into the controller.
    pub fn run_realtime(&mut self, ticks: u32) {
        let (mut producer, mut consumer) = HeapRb::<ControlEvent>::new(EVENT_QUEUE_LEN).split();
        let finished = Arc::new(AtomicBool::new(false));
        let half_period = Duration::from_millis(self.config.tick_interval_ms() / 2);

        let done = finished.clone();
        let clock = thread::spawn(move || {
            for _ in 0..ticks {
                for phase in [true, false] {
                    if producer.try_push(ControlEvent::MainClock { external: true, phase }).is_err() {
                        warn!("event queue full, dropping clock pulse");
                    }
                    thread::sleep(half_period);
                }
            }
            done.store(true, Ordering::Release);
        });

        info!(ticks, "running in real time");
        let origin = self.now_ms();
        let started = Instant::now();
        loop {
            let now = origin + started.elapsed().as_millis() as u64;
            // Read before draining: every pulse pushed before the flag is then in the queue.
            let clock_done = finished.load(Ordering::Acquire);
            while let Some(event) = consumer.try_pop() {
                self.dispatch_at(now, &event);
            }
            self.advance_to(now);

            if clock_done {
                break;
            }
            thread::sleep(Duration::from_millis(1));
        }
        if clock.join().is_err() {
            warn!("clock thread panicked");
        }

        // Let the last gate pulses finish.
        let tail = self.now_ms() + self.config.gate_length_ms as u64;
        self.advance_to(tail);
    }
}
