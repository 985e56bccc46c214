use crossterm::event::{self, DisableFocusChange, EnableFocusChange, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use slither::audio::{AudioCue, AudioSink, NullAudio};
use slither::game_loop::{GameEvent, Session};
use slither::input::{map_key, InputEvent};
use slither::persistence::{load_profile, save_profile, Profile};
use slither::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let profile = load_profile();
    let mut session = Session::new(profile.high_score, profile.muted);
    let mut audio = NullAudio;
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let start = Instant::now();
    let result = run(&mut terminal, &mut session, &mut audio, &mut rng, start);

    // Cleanup terminal even if the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableFocusChange)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run<B: ratatui::backend::Backend, A: AudioSink, R: rand::Rng>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    audio: &mut A,
    rng: &mut R,
    start: Instant,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &session.snapshot()))?;

        // Poll input briefly; the frame cadence comes from this timeout.
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = map_key(key) {
                        if input == InputEvent::Quit {
                            return Ok(());
                        }
                        if let Some(event) = session.handle_input(input, rng) {
                            dispatch(session, audio, event);
                        }
                    }
                }
                Event::FocusLost => session.focus_lost(),
                Event::FocusGained => session.focus_gained(),
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        for event in session.frame(now_ms, rng) {
            dispatch(session, audio, event);
        }
    }
}

/// Map simulation events onto audio cues and profile saves. Persistence
/// failures silently disable saving; the game plays on.
fn dispatch<A: AudioSink>(session: &Session, audio: &mut A, event: GameEvent) {
    let cue = match event {
        GameEvent::Ate => Some(AudioCue::Eat),
        GameEvent::LeveledUp { .. } => Some(AudioCue::LevelUp),
        GameEvent::Died { .. } => Some(AudioCue::Die),
        GameEvent::Won { .. } => None,
        GameEvent::MutedChanged { .. } => None,
    };
    if let Some(cue) = cue {
        if !session.is_muted() {
            audio.play(cue);
        }
    }

    match event {
        GameEvent::Died { .. } | GameEvent::Won { .. } | GameEvent::MutedChanged { .. } => {
            let _ = save_profile(&Profile {
                high_score: session.high_score(),
                muted: session.is_muted(),
            });
        }
        _ => {}
    }
}
