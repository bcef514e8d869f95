mod fake_run_endpoint;
mod scripted_prompter;

pub use fake_run_endpoint::FakeRunEndpoint;
pub use scripted_prompter::ScriptedPrompter;
