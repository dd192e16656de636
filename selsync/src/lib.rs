pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod languages;
pub mod layout;
pub mod render;
pub mod select;
pub mod sync;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{collect_selects, find_element, find_named, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use languages::{default_languages, language_select, Language};
pub use layout::{layout, LayoutResult, Rect};
pub use select::{SelectData, SelectState};
pub use sync::{DocumentLookup, GroupLookup, GroupMember, SyncError, SyncPolicy, Synchronizer};
pub use terminal::Terminal;
pub use types::*;
