use std::fmt;
use std::str::FromStr;

use crate::shared::JoinError;

/// Mirror of `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    Loading,
    Interactive,
    #[default]
    Complete,
}

impl ReadyState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadyState::Loading => "loading",
            ReadyState::Interactive => "interactive",
            ReadyState::Complete => "complete",
        }
    }

    /// Whether the document has been parsed
    pub fn is_parsed(self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadyState {
    type Err = JoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loading" => Ok(ReadyState::Loading),
            "interactive" => Ok(ReadyState::Interactive),
            "complete" => Ok(ReadyState::Complete),
            other => Err(JoinError::dom(format!("unknown readyState '{other}'"))),
        }
    }
}

/// Outcome of [`when_ready`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The callback already ran
    Immediate,
    /// The callback waits for the content-loaded signal
    Deferred,
}

/// Source of the document's ready signal
pub trait ReadySignal {
    fn ready_state(&self) -> ReadyState;

    /// Register `callback` to run once when the content has loaded
    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), JoinError>;
}

/// Run `f` now if the document is parsed, otherwise once it is
pub fn when_ready<S, F>(signal: &S, f: F) -> Result<Readiness, JoinError>
where
    S: ReadySignal + ?Sized,
    F: FnOnce() + 'static,
{
    let state = signal.ready_state();
    if state.is_parsed() {
        f();
        return Ok(Readiness::Immediate);
    }

    tracing::debug!(%state, "document still loading, deferring");
    signal.on_content_loaded(Box::new(f))?;
    Ok(Readiness::Deferred)
}
