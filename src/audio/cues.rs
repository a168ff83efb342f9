//! Audio cue abstraction and the per-theme cue set

use tracing::debug;

use crate::themes::ThemeConfig;

/// Work loop volume, matching the page's looping track level
pub const WORK_LOOP_VOLUME: f32 = 0.7;

/// Alert one-shot volume
pub const ALERT_VOLUME: f32 = 1.0;

/// Menu click volume
pub const MENU_CLICK_VOLUME: f32 = 0.5;

/// Playback parameters applied when a cue is loaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueOptions {
    pub volume: f32,
    pub looped: bool,
}

/// A single loaded audio cue
///
/// `pause` keeps the playback position so a later `play` resumes; `stop`
/// rewinds. Dropping a cue releases its resources.
pub trait AudioCue: Send {
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Loads audio assets into playable cues
///
/// Loading is best-effort: a backend that cannot produce sound for an
/// asset returns a silent cue rather than an error.
pub trait AudioBackend: Send + Sync {
    fn load(&self, asset: &str, options: CueOptions) -> Box<dyn AudioCue>;
}

/// Cue that plays nothing, used when loading fails or audio is disabled
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn stop(&mut self) {}
    fn is_playing(&self) -> bool {
        false
    }
}

/// Backend that produces only silent cues
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn load(&self, _asset: &str, _options: CueOptions) -> Box<dyn AudioCue> {
        Box::new(SilentCue)
    }
}

/// The three independently owned cues bound to the selected theme
///
/// The rest track from the theme bundle is carried in the catalog but has
/// no cue; nothing plays it.
pub struct AudioCueSet {
    pub work_loop: Box<dyn AudioCue>,
    pub alert: Box<dyn AudioCue>,
    pub menu_click: Box<dyn AudioCue>,
}

impl AudioCueSet {
    /// Load the cue set for a theme, scaling cue volumes by the master volume
    pub fn for_theme(backend: &dyn AudioBackend, theme: &ThemeConfig, master_volume: u8) -> Self {
        let scale = f32::from(master_volume.min(100)) / 100.0;
        debug!("Loading audio cues for theme {}", theme.name);

        Self {
            work_loop: backend.load(
                &theme.sounds.work,
                CueOptions {
                    volume: WORK_LOOP_VOLUME * scale,
                    looped: true,
                },
            ),
            alert: backend.load(
                &theme.sounds.alert,
                CueOptions {
                    volume: ALERT_VOLUME * scale,
                    looped: false,
                },
            ),
            menu_click: backend.load(
                &theme.sounds.menu,
                CueOptions {
                    volume: MENU_CLICK_VOLUME * scale,
                    looped: false,
                },
            ),
        }
    }

    /// Stop all playback; called before the set is replaced or dropped
    pub fn release(&mut self) {
        self.work_loop.stop();
        self.alert.stop();
        self.menu_click.stop();
    }
}
