//! Startup configuration and autoplay for page videos.

use crate::dom::Listener;
use crate::error::describe;
use folio_core::{AutoplayOutcome, BehaviorError, PlaybackSettings};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlMediaElement;

pub struct VideoInitializer {
    settings: PlaybackSettings,
}

impl VideoInitializer {
    pub fn new(settings: PlaybackSettings) -> Self {
        Self { settings }
    }

    /// Applies the playback settings to every video and requests playback.
    ///
    /// Settings are in place before this returns; autoplay resolves later and
    /// a refusal only installs a click-to-play fallback.
    pub fn configure(&self, videos: &[HtmlMediaElement]) -> Result<usize, BehaviorError> {
        for video in videos {
            video.set_playback_rate(self.settings.rate);
            video.set_muted(self.settings.muted);
            autoplay(video.clone());
        }
        Ok(videos.len())
    }
}

fn autoplay(video: HtmlMediaElement) {
    let promise = match video.play() {
        Ok(promise) => promise,
        Err(e) => {
            settle(
                &video,
                AutoplayOutcome::Deferred {
                    reason: describe(&e),
                },
            );
            return;
        }
    };

    spawn_local(async move {
        let outcome = match JsFuture::from(promise).await {
            Ok(_) => AutoplayOutcome::Playing,
            Err(e) => AutoplayOutcome::Deferred {
                reason: describe(&e),
            },
        };
        settle(&video, outcome);
    });
}

fn settle(video: &HtmlMediaElement, outcome: AutoplayOutcome) {
    match &outcome {
        AutoplayOutcome::Playing => log::debug!("Autoplay started for {}", video.current_src()),
        AutoplayOutcome::Deferred { reason } => log::info!("Autoplay prevented: {}", reason),
    }

    if outcome.needs_click_fallback() {
        if let Err(e) = install_click_to_play(video) {
            log::warn!("Could not install click-to-play fallback: {}", e);
        }
    }
}

fn install_click_to_play(video: &HtmlMediaElement) -> Result<(), BehaviorError> {
    let target = video.clone();
    Listener::new(video, "click", move |_| {
        match target.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::info!("Play failed: {}", describe(&e));
                }
            }),
            Err(e) => log::info!("Play failed: {}", describe(&e)),
        }
    })?
    .forget();
    Ok(())
}
