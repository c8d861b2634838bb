//! Console walkthrough of a press/hold/release fade cycle.
//!
//! Run with: cargo run --example fade_console

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use midifade::{FadeConfig, FadeDirection, FadeDriver, FadeMode, FadeTicker};

fn main() -> midifade::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let driver = Arc::new(FadeDriver::new(
        10.0,
        |identity: &str, value: u8| println!("cc  {identity} = {value}"),
        |identity: &str| println!("done {identity}"),
    )?);

    driver.configure(
        "button-1",
        &FadeConfig {
            from_value: 0,
            to_value: 127,
            duration_ms: 400.0,
            curve: 0.0,
            direction: FadeDirection::Forward,
            mode: FadeMode::Momentary,
        },
    )?;

    let ticker = FadeTicker::spawn(Arc::clone(&driver));

    println!("press");
    driver.key_down("button-1")?;
    thread::sleep(Duration::from_millis(600));

    println!("release");
    driver.key_up("button-1")?;
    thread::sleep(Duration::from_millis(600));

    ticker.stop();
    Ok(())
}
