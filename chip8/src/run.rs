use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{error, info};
use sdl2::event::Event;

use chip8_core::constants::{CLOCK_SPEED, TIMER_INTERVAL};
use chip8_core::Chip8;
use chip8_display::Display;

use crate::keymap::keymap;

/// Hosts the machine: pumps sdl2 events through the keymap, steps the CPU
/// at roughly its native clock speed, drives the 60Hz timer tick, and
/// renders whenever the frame buffer changed.
pub fn run(rom: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut chip8 = Chip8::new();

    let bytes = fs::read(&rom)?;
    chip8.load_rom(&bytes)?;
    info!("loaded {} byte ROM from {}", bytes.len(), rom.display());

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let cycle_time = Duration::from_nanos(CLOCK_SPEED);
    let timer_interval = Duration::from_nanos(TIMER_INTERVAL);
    let mut last_timer_tick = Instant::now();

    'event: loop {
        let cycle_started = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            }
        }

        // a fatal core error ends the program; an unrecognized opcode is
        // already handled inside the core as a no-op
        if let Err(e) = chip8.step() {
            error!("halting: {}", e);
            break 'event;
        }

        // timers run at a fixed 60Hz regardless of the cycle rate
        if last_timer_tick.elapsed() >= timer_interval {
            chip8.tick_timers();
            last_timer_tick = Instant::now();
        }

        if let Some(frame) = chip8.get_frame() {
            display.render(&frame)?;
        }

        let elapsed = cycle_started.elapsed();
        if cycle_time > elapsed {
            std::thread::sleep(cycle_time - elapsed);
        }
    }

    Ok(())
}
