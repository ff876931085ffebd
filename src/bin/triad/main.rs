//! Demo player: opens the default output device and plays a short sequence
//! through the engine - kick on the beat, a pluck arpeggio over it, and a
//! piano chord to finish.

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{bail, eyre, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use triad_synth::synth::{EngineConfig, PolyEngine};

fn main() -> Result<()> {
    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no output device available"))?;
    let config = device.default_output_config()?;

    if config.sample_format() != cpal::SampleFormat::F32 {
        bail!(
            "demo requires an f32 output stream, got {:?}",
            config.sample_format()
        );
    }

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;
    println!(
        "playing on {:?} at {} Hz, {} channel(s)",
        device.name()?,
        sample_rate,
        channels
    );

    let (mut handle, mut engine) = PolyEngine::with_queue(EngineConfig::new(sample_rate), 64)?;

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            // The engine only contributes signal; clear the buffer first.
            data.fill(0.0);
            engine.render_block(data, channels);
        },
        |err| eprintln!("stream error: {err}"),
        None,
    )?;
    stream.play()?;

    let beat = Duration::from_millis(500);
    let arpeggio = [261.63, 329.63, 392.00, 523.25]; // C4 E4 G4 C5

    for bar in 0..2 {
        println!("bar {}", bar + 1);
        for &freq in &arpeggio {
            handle.trigger_kick()?;
            handle.trigger_plucked_string(freq)?;
            thread::sleep(beat);
        }
    }

    println!("piano chord");
    handle.trigger_fm_piano(261.63)?;
    handle.trigger_fm_piano(329.63)?;
    handle.trigger_fm_piano(392.00)?;

    // Let the chord ring out before dropping the stream.
    thread::sleep(Duration::from_secs(3));

    Ok(())
}
