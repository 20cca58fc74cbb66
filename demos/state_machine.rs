//! A connection state machine whose states are variant alternatives

use polyvariant::{Variant, Visit, VisitOutput};

#[derive(Debug, Clone, PartialEq)]
struct Idle;

#[derive(Debug, Clone, PartialEq)]
struct Running {
    job: String,
    progress: u8,
}

#[derive(Debug, Clone, PartialEq)]
struct Paused {
    job: String,
    at: u8,
}

type State = Variant<(Idle, Running, Paused)>;

#[derive(Debug, Clone, Copy)]
enum Event {
    Start,
    Tick,
    Pause,
    Resume,
}

/// Computes the next state; `None` means the event is ignored.
struct Step(Event);

impl VisitOutput for Step {
    type Output = Option<State>;
}

impl<'a> Visit<&'a Idle> for Step {
    fn visit(self, _: &'a Idle) -> Option<State> {
        match self.0 {
            Event::Start => Some(State::new(Running {
                job: String::from("backup"),
                progress: 0,
            })),
            _ => None,
        }
    }
}

impl<'a> Visit<&'a Running> for Step {
    fn visit(self, running: &'a Running) -> Option<State> {
        match self.0 {
            Event::Tick if running.progress >= 100 => Some(State::new(Idle)),
            Event::Tick => Some(State::new(Running {
                job: running.job.clone(),
                progress: running.progress.saturating_add(40).min(100),
            })),
            Event::Pause => Some(State::new(Paused {
                job: running.job.clone(),
                at: running.progress,
            })),
            _ => None,
        }
    }
}

impl<'a> Visit<&'a Paused> for Step {
    fn visit(self, paused: &'a Paused) -> Option<State> {
        match self.0 {
            Event::Resume => Some(State::new(Running {
                job: paused.job.clone(),
                progress: paused.at,
            })),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    println!("Variant State Machine Example");
    println!("=============================");

    let mut state = State::new(Idle);
    let events = [
        Event::Start,
        Event::Tick,
        Event::Pause,
        Event::Tick,
        Event::Resume,
        Event::Tick,
        Event::Tick,
        Event::Tick,
    ];

    for event in events {
        match state.visit(Step(event))? {
            Some(next) => {
                println!("{event:?}: {state:?} -> {next:?}");
                state.assign(next);
            }
            None => println!("{event:?}: ignored in {state:?}"),
        }
    }

    anyhow::ensure!(state.holds_alternative::<Idle, _>(), "job did not finish");
    println!("Finished in {:?}", state.alternative_name());
    Ok(())
}
