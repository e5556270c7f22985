pub mod confirm_dialog;
pub mod export_buttons;
pub mod modal;
pub mod progress_bar;
pub mod search_input;
pub mod stat_card;

pub use confirm_dialog::ConfirmDialog;
pub use export_buttons::ExportButtons;
pub use modal::Modal;
pub use progress_bar::ProgressBar;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
