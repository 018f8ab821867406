mod render;
mod state;
mod update;

pub use render::{
    ITEM_HEIGHT, choice_label, field_labels, list_area, position_at, render_event_list,
};
pub use state::EventListState;
pub use update::handle_list_key;
