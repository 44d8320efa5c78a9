// Front-end glue around the responder: output formats and the interactive session.

pub mod output;
pub mod session;

pub use output::OutputFormat;
pub use session::ChatSession;
