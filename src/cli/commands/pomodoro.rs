//! Live pomodoro countdown

use std::io::{self, Write};
use std::thread;
use std::time::Instant;
use study_hub::config::Config;
use study_hub::core::timer::{Pomodoro, TimerMode, TICK_PERIOD};
use study_hub::info;

fn render(timer: &Pomodoro) {
    print!(
        "\r{:<10} {}  [{:>3.0}%]  cycles: {}   ",
        timer.mode(),
        timer.formatted(),
        timer.progress() * 100.0,
        timer.completed_cycles()
    );
    io::stdout().flush().ok();
}

/// Run the countdown until `cycles` focus periods are done (forever when `None`)
pub fn run(config: &Config, cycles: Option<u32>) {
    let durations = config.pomodoro_durations();
    let mut timer = Pomodoro::new(durations);
    info!(
        "pomodoro: focus {}s, break {}s, cycles {:?}",
        durations.focus_secs, durations.break_secs, cycles
    );

    if cycles == Some(0) {
        println!("✓ Nothing to do for 0 cycles");
        return;
    }

    timer.start();
    render(&timer);
    let mut last = Instant::now();
    loop {
        thread::sleep(TICK_PERIOD);
        let now = Instant::now();
        let transitions = timer.advance(now - last);
        last = now;

        for transition in &transitions {
            let label = match transition.to {
                TimerMode::Break => "focus period done, take a break",
                TimerMode::Focus => "break over, back to focus",
            };
            println!("\r✓ {label} (cycles: {})          ", transition.completed_cycles);
        }
        render(&timer);

        if cycles.is_some_and(|target| timer.completed_cycles() >= target) {
            timer.pause();
            println!();
            println!("✓ Completed {} cycle(s)", timer.completed_cycles());
            info!("pomodoro finished after {} cycles", timer.completed_cycles());
            return;
        }
    }
}
