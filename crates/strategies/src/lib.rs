// crates/strategies/src/lib.rs

pub mod traits;
pub mod newline_padding;
pub mod claude_url;
pub mod file_renamer;
pub mod sanitize;
pub mod registry;

pub use claude_url::ClaudeUrl;
pub use file_renamer::FileRenamer;
pub use newline_padding::NewlinePadding;
pub use registry::{Selection, StrategyRegistry};
pub use traits::{Configurable, Strategy};
