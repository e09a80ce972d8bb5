pub mod context;
pub mod display;
pub mod events;
pub mod filter;
pub mod memo;
pub mod node;
pub mod options;
pub mod render;
pub mod slots;
pub mod state;
pub mod types;

pub use context::{AutocompleteContext, ContextSnapshot};
pub use display::{select_display_mode, show_clear_icon, trailing_icon, DisplayMode, TrailingIcon};
pub use filter::{filter_options, fuzzy_filter, FilterMatch};
pub use memo::Memo;
pub use node::{Node, NodeKind};
pub use options::{normalize_options, AutocompleteOption, OptionsEntry};
pub use render::{AutocompleteView, DropdownRequest, InputProps};
pub use slots::{resolve_slots, SlotExtraction};
pub use state::{Autocomplete, AutocompleteBuilder, AutocompleteId};
pub use types::{Rect, Size, Status};
