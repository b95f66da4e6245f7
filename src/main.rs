use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use staff_quiz::{
    AnswerOption, ClefSelection, Clock, Difficulty, Headless, ManualClock, NoteName, NoteNaming,
    QuizEngine, RandomSource, RngSource, RoundState, Settings, TextStaffRenderer,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: staff-quiz [--clef treble|bass|alto|mixed] [--difficulty easy|hard]
                  [--naming letter|solfege] [--config settings.yaml] [--seed N]";

struct Args {
    clef: Option<String>,
    difficulty: Option<String>,
    naming: Option<String>,
    config: Option<String>,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        clef: None,
        difficulty: None,
        naming: None,
        config: None,
        seed: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        if flag == "--help" || flag == "-h" {
            return Err(String::new());
        }
        let value = iter
            .next()
            .ok_or_else(|| format!("Missing value for '{}'", flag))?
            .clone();
        match flag.as_str() {
            "--clef" => parsed.clef = Some(value),
            "--difficulty" => parsed.difficulty = Some(value),
            "--naming" => parsed.naming = Some(value),
            "--config" => parsed.config = Some(value),
            "--seed" => {
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed '{}'", value))?;
                parsed.seed = Some(seed);
            }
            _ => return Err(format!("Unknown option '{}'", flag)),
        }
    }
    Ok(parsed)
}

/// Settings file first, then command-line flags on top.
fn load_settings(args: &Args) -> Result<Settings, String> {
    let mut settings = match &args.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("Error reading file '{}': {}", path, e))?;
            Settings::from_yaml(&source).map_err(|e| e.to_string())?
        }
        None => Settings::default(),
    };

    if let Some(name) = &args.clef {
        settings.quiz.clef =
            ClefSelection::from_str(name).ok_or_else(|| format!("Unknown clef '{}'", name))?;
    }
    if let Some(name) = &args.difficulty {
        settings.quiz.difficulty = Difficulty::from_str(name)
            .ok_or_else(|| format!("Unknown difficulty '{}'", name))?;
    }
    if let Some(name) = &args.naming {
        settings.quiz.naming =
            NoteNaming::from_str(name).ok_or_else(|| format!("Unknown note naming '{}'", name))?;
    }
    Ok(settings)
}

/// Accepts an option number (1-4), a letter, or a solfège syllable.
fn parse_answer(input: &str, options: &[AnswerOption]) -> Option<NoteName> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return options.get(n.checked_sub(1)?).map(|o| o.letter);
    }
    NoteName::from_label(input)
}

/// Time left in the live question's answer window.
fn time_left<R: RandomSource>(engine: &QuizEngine<ManualClock, R>) -> Duration {
    engine
        .countdown()
        .map(|c| c.remaining(engine.clock().now()))
        .unwrap_or_default()
}

fn prompt(options: &[AnswerOption], remaining: Duration) -> String {
    let labels: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}) {}", i + 1, o.label))
        .collect();
    format!("{}   [{:.1}s] > ", labels.join("   "), remaining.as_secs_f64())
}

fn flush(out: &mut impl Write) {
    if let Err(e) = out.flush() {
        warn!(error = %e, "failed to flush prompt");
    }
}

/// Stdin lines arrive on a channel so the countdown can expire while the
/// player is still typing.
fn spawn_answer_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to read answer");
                    break;
                }
            }
        }
    });
    rx
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            if !e.is_empty() {
                eprintln!("{}", e);
            }
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os_rng(),
    };

    let mut engine = QuizEngine::new(
        ManualClock::new(),
        rng,
        Box::new(TextStaffRenderer::new(io::stdout())),
        Box::new(Headless),
    )
    .with_timing(settings.timing);

    let naming = settings.quiz.naming;
    engine.on_round_resolved(move |outcome| {
        let answer = naming.label(outcome.question.correct_letter());
        if outcome.correct {
            println!("Correct! It was {} ({}).", answer, outcome.question.pitch());
        } else if outcome.timed_out() {
            println!("Time's up! It was {} ({}).", answer, outcome.question.pitch());
        } else {
            println!("Wrong. It was {} ({}).", answer, outcome.question.pitch());
        }
    });
    engine.on_game_over(|summary| {
        println!(
            "\nGame over: {} / {} correct",
            summary.correct_count, summary.questions_asked
        );
    });

    if let Err(e) = engine.start_game(settings.quiz) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let answers = spawn_answer_reader();

    loop {
        match engine.state() {
            RoundState::AwaitingAnswer => {
                let remaining = time_left(&engine);
                print!("{}", prompt(engine.current_options(), remaining));
                flush(&mut io::stdout());

                let started = Instant::now();
                let received = answers.recv_timeout(remaining);
                if let Err(RecvTimeoutError::Timeout) = received {
                    println!();
                }

                // Real time spent waiting counts against the countdown
                engine.advance_clock(started.elapsed());

                match received {
                    Ok(line) => {
                        if engine.state() != RoundState::AwaitingAnswer {
                            continue;
                        }
                        match parse_answer(&line, engine.current_options()) {
                            Some(letter) => {
                                engine.submit_answer(letter);
                            }
                            None => println!(
                                "Pick 1-{} or type a note name.",
                                engine.current_options().len()
                            ),
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            RoundState::Resolved => {
                let delay = engine.timing().feedback_delay;
                thread::sleep(delay);
                // Lines typed during feedback belong to no question
                while answers.try_recv().is_ok() {}
                engine.advance_clock(delay);
            }
            RoundState::Idle | RoundState::GameOver => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("staff-quiz")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = parse_args(&args(&["--clef", "alto", "--difficulty", "hard", "--seed", "9"]))
            .unwrap();
        let settings = load_settings(&parsed).unwrap();
        assert_eq!(settings.quiz.clef, ClefSelection::Fixed(staff_quiz::Clef::Alto));
        assert_eq!(settings.quiz.difficulty, Difficulty::Hard);
        assert_eq!(parsed.seed, Some(9));
    }

    #[test]
    fn test_bad_flags_are_rejected() {
        assert!(parse_args(&args(&["--clef"])).is_err());
        assert!(parse_args(&args(&["--tempo", "fast"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        let parsed = parse_args(&args(&["--clef", "tenor"])).unwrap();
        assert!(load_settings(&parsed).is_err());
    }

    #[test]
    fn test_answers_by_number_or_name() {
        let options: Vec<AnswerOption> = [NoteName::G, NoteName::E, NoteName::A, NoteName::C]
            .into_iter()
            .map(|n| AnswerOption::new(n, NoteNaming::Letter))
            .collect();
        assert_eq!(parse_answer("2", &options), Some(NoteName::E));
        assert_eq!(parse_answer(" c ", &options), Some(NoteName::C));
        assert_eq!(parse_answer("sol", &options), Some(NoteName::G));
        assert_eq!(parse_answer("0", &options), None);
        assert_eq!(parse_answer("5", &options), None);
        assert_eq!(parse_answer("x", &options), None);
    }

    #[test]
    fn test_prompt_shows_time_left() {
        let mut engine = QuizEngine::new(
            ManualClock::new(),
            RngSource::seeded(4),
            Box::new(Headless),
            Box::new(Headless),
        );
        engine.start_game(Default::default()).unwrap();
        assert_eq!(time_left(&engine), Duration::from_secs(7));

        engine.advance_clock(Duration::from_millis(2500));
        let remaining = time_left(&engine);
        assert_eq!(remaining, Duration::from_millis(4500));

        let text = prompt(engine.current_options(), remaining);
        assert!(text.starts_with("1) "));
        assert!(text.contains("4) "));
        assert!(text.ends_with("[4.5s] > "));

        // Once the round resolves there is no window left
        engine.advance_clock(Duration::from_millis(4500));
        assert_eq!(engine.state(), RoundState::Resolved);
        assert_eq!(time_left(&engine), Duration::ZERO);
    }

    #[test]
    fn test_flush_failure_is_not_fatal() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        flush(&mut Broken);
    }
}
