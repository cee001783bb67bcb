pub mod controller;
mod events;
mod overlay;
mod runner;
mod scroll;
mod state;
mod status;
mod terminal;
mod turns;
mod view;

pub use events::{AppEvent, InputEvent, TurnEvent};
pub use overlay::{OverlayState, PickerItem, PickerState};
pub use runner::run_app;
pub use scroll::ScrollState;
pub use state::{AppState, Focus};
pub use status::AppStatus;
pub use terminal::{init_terminal, restore_terminal};
pub use turns::TurnManager;
pub use view::TuiView;
