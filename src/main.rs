//! euclid-grid — headless simulator for the euclidean grid sequencer.
//!
//! Usage:
//!   cargo run -- [--config sim.toml] [--ticks N] [--realtime] [--press X,Y]...
//!
//! Presses are delivered in order before the clock starts, so
//! `--press 4,1 --press 2,0` selects fill on channel 0 and sets it to 3.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::{env, process};

use er_host::{SimConfig, Simulator};
use er_ir::ER_COUNT;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct Args {
    config: Option<PathBuf>,
    ticks: Option<u32>,
    realtime: bool,
    presses: Vec<(u8, u8)>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(env::args().skip(1)).unwrap_or_else(|msg| {
        eprintln!("{}", msg);
        eprintln!("Usage: euclid-grid [--config sim.toml] [--ticks N] [--realtime] [--press X,Y]...");
        process::exit(1);
    });

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        }),
        None => SimConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    config.realtime |= args.realtime;

    info!(
        tempo_bpm = config.tempo_bpm,
        ticks = config.ticks,
        gate_length_ms = config.gate_length_ms,
        "starting simulator"
    );

    let ticks = config.ticks;
    let realtime = config.realtime;
    let mut sim = Simulator::new(config);
    for &(x, y) in &args.presses {
        sim.press(x, y);
    }

    if realtime {
        sim.run_realtime(ticks);
        print!("{}", sim.frame());
    } else {
        for tick in 0..ticks {
            sim.step();
            println!("tick {:>4}  t = {} ms", tick, sim.now_ms());
            print!("{}", sim.frame());
        }
    }

    println!();
    for channel in 0..ER_COUNT as u8 {
        let pulses = sim.platform().gates.pulses(channel);
        println!("gate {}: {} pulses", channel, pulses.len());
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        config: None,
        ticks: None,
        realtime: false,
        presses: Vec::new(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let value = args.next().ok_or("--ticks needs a number")?;
                parsed.ticks = Some(value.parse().map_err(|_| format!("bad tick count: {}", value))?);
            }
            "--realtime" => parsed.realtime = true,
            "--press" => {
                let value = args.next().ok_or("--press needs X,Y")?;
                parsed.presses.push(parse_press(&value)?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(parsed)
}

fn parse_press(value: &str) -> Result<(u8, u8), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("bad press: {}", value))?;
    let x = x.trim().parse().map_err(|_| format!("bad column: {}", x))?;
    let y = y.trim().parse().map_err(|_| format!("bad row: {}", y))?;
    Ok((x, y))
}
