use crate::domain::models::PaletteEvent;
use std::path::PathBuf;
use std::time::Duration;

/// Side effects the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScheduleFocus(Duration),
    CancelFocus,
    Emit(PaletteEvent),
    LoadCatalog(PathBuf),
}
