mod config;
mod progress;
mod script;
mod symbol;

pub use config::{
    ConfigError, PoolSource, PracticeConfig, PracticeConfigDraft, PracticeMode, QuestionLimit,
    ScriptFilter,
};
pub use progress::{PracticeTotals, ProgressRecord, ScriptProgress};
pub use script::Script;
pub use symbol::{SymbolEntry, SymbolError};
