//! rodio-backed audio playback
//!
//! Each cue owns a playback thread holding the output stream and sink;
//! coordinator calls are forwarded as commands over a channel, so the
//! stream handle never has to cross threads.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::warn;

use super::cues::{AudioBackend, AudioCue, CueOptions, SilentCue};

enum CueCommand {
    Play,
    Pause,
    Stop,
    Release,
}

/// Audio backend resolving asset names under a sounds directory
pub struct RodioBackend {
    sounds_dir: PathBuf,
}

impl RodioBackend {
    /// Create a backend that loads assets from the given directory
    pub fn new(sounds_dir: PathBuf) -> Self {
        Self { sounds_dir }
    }
}

impl AudioBackend for RodioBackend {
    fn load(&self, asset: &str, options: CueOptions) -> Box<dyn AudioCue> {
        let path = self.sounds_dir.join(asset);
        if !path.exists() {
            warn!("Audio asset not found, cue will be silent: {}", path.display());
            return Box::new(SilentCue);
        }
        Box::new(RodioCue::spawn(path, options))
    }
}

/// Handle to the playback thread driving one sink
struct RodioCue {
    commands: mpsc::Sender<CueCommand>,
    // Tracks commanded state; only the looping work cue consults it, and
    // that cue never drains on its own.
    playing: Arc<AtomicBool>,
}

impl RodioCue {
    fn spawn(path: PathBuf, options: CueOptions) -> Self {
        let (commands, command_rx) = mpsc::channel();
        let playing = Arc::new(AtomicBool::new(false));

        thread::spawn(move || cue_thread(path, options, command_rx));

        Self { commands, playing }
    }

    fn send(&self, command: CueCommand) {
        // The thread exits only on Release; a closed channel just means
        // the cue is already silent.
        let _ = self.commands.send(command);
    }
}

impl AudioCue for RodioCue {
    fn play(&mut self) {
        self.playing.store(true, Ordering::SeqCst);
        self.send(CueCommand::Play);
    }

    fn pause(&mut self) {
        self.playing.store(false, Ordering::SeqCst);
        self.send(CueCommand::Pause);
    }

    fn stop(&mut self) {
        self.playing.store(false, Ordering::SeqCst);
        self.send(CueCommand::Stop);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl Drop for RodioCue {
    fn drop(&mut self) {
        self.send(CueCommand::Release);
    }
}

/// Decode the asset for one append onto the sink
fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))
}

fn cue_thread(path: PathBuf, options: CueOptions, commands: mpsc::Receiver<CueCommand>) {
    let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
        warn!("No audio output device, cue will be silent: {}", path.display());
        drain_until_release(commands);
        return;
    };
    let Ok(sink) = Sink::try_new(&stream_handle) else {
        warn!("Failed to create audio sink, cue will be silent: {}", path.display());
        drain_until_release(commands);
        return;
    };
    sink.set_volume(options.volume);

    while let Ok(command) = commands.recv() {
        match command {
            CueCommand::Play => {
                // An empty sink means stopped or never started; paused
                // sinks keep their queue, so play resumes in place.
                if sink.empty() {
                    match open_source(&path) {
                        Ok(source) if options.looped => sink.append(source.repeat_infinite()),
                        Ok(source) => sink.append(source),
                        Err(e) => warn!("{}", e),
                    }
                }
                sink.play();
            }
            CueCommand::Pause => sink.pause(),
            CueCommand::Stop => sink.stop(),
            CueCommand::Release => break,
        }
    }
    // Dropping the sink and stream here releases the device.
}

fn drain_until_release(commands: mpsc::Receiver<CueCommand>) {
    while let Ok(command) = commands.recv() {
        if matches!(command, CueCommand::Release) {
            break;
        }
    }
}
