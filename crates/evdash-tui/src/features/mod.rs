pub mod detail;
pub mod event_list;
pub mod statusline;
