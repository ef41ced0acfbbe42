/// Inbound adapters - drive the application from the outside
mod console_prompter;

pub use console_prompter::ConsolePrompter;
