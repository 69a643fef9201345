//! Speaker output - background melodies and tones.
//!
//! Requests are fire-and-forget: [`play`] signals the audio task and
//! returns immediately. A new request cuts off whatever is playing.

use defmt::{debug, info};
use embassy_futures::select::{select, Either};
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use pomodoro_matrix::sound::Melody;

#[derive(Clone, Copy, defmt::Format)]
pub enum AudioRequest {
    Melody(Melody),
    Tone { hz: u16, ms: u16 },
}

static AUDIO: Signal<CriticalSectionRawMutex, AudioRequest> = Signal::new();

/// Queue a request, replacing any pending one.
pub fn play(request: AudioRequest) {
    AUDIO.signal(request);
}

#[embassy_executor::task]
pub async fn audio_task(mut pwm: SimplePwm<'static, PWM0>) -> ! {
    pwm.disable();
    loop {
        let mut request = AUDIO.wait().await;
        loop {
            info!("Audio: {}", request);
            let next = match request {
                AudioRequest::Melody(melody) => play_melody(&mut pwm, melody).await,
                AudioRequest::Tone { hz, ms } => play_tone(&mut pwm, hz, ms as u32).await,
            };
            match next {
                Some(interrupting) => request = interrupting,
                None => break,
            }
        }
    }
}

/// Returns the request that interrupted playback, if any.
async fn play_melody(pwm: &mut SimplePwm<'static, PWM0>, melody: Melody) -> Option<AudioRequest> {
    for note in melody.notes() {
        if let Some(next) = play_tone(pwm, note.hz, note.duration_ms()).await {
            return Some(next);
        }
    }
    None
}

/// A zero frequency is a rest.
async fn play_tone(pwm: &mut SimplePwm<'static, PWM0>, hz: u16, ms: u32) -> Option<AudioRequest> {
    if hz > 0 {
        debug!("Audio: {} Hz for {} ms", hz, ms);
        pwm.enable();
        pwm.set_period(hz as u32);
        pwm.set_duty(0, pwm.max_duty() / 2);
    }

    let interrupted = match select(Timer::after_millis(ms as u64), AUDIO.wait()).await {
        Either::First(()) => None,
        Either::Second(next) => Some(next),
    };

    pwm.disable();
    interrupted
}
