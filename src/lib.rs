pub mod charsets;
pub mod color;
pub mod config;
pub mod error;
pub mod frames;
pub mod spinner;
pub mod terminal;

pub use charsets::{CHAR_SETS, DEFAULT_CHAR_SET};
pub use color::{Paint, Style};
pub use config::{Config, Output};
pub use error::{Result, SpinnerError};
pub use spinner::{Resolution, Spinner, Status};
pub use terminal::{RenderMode, TerminalMode};
