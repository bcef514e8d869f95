use crate::ports::{CellStore, Prompter, RunEndpoint};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, E: RunEndpoint, S: CellStore> {
    prompter: P,
    endpoint: E,
    sheet: S,
}

impl<P: Prompter, E: RunEndpoint, S: CellStore> AppContext<P, E, S> {
    /// Create a new application context.
    pub fn new(prompter: P, endpoint: E, sheet: S) -> Self {
        Self { prompter, endpoint, sheet }
    }

    /// Get a reference to the input prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the run endpoint.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Get a reference to the active sheet.
    pub fn sheet(&self) -> &S {
        &self.sheet
    }
}
