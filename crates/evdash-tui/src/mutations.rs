//! Cross-slice state mutations.
//!
//! Overlays return these to request changes outside their own state. The
//! main reducer applies them in order.

use evdash_core::filter::{FilterChoice, FilterField};

use crate::features::statusline::StatusMessage;

#[derive(Debug)]
pub enum StateMutation {
    Filter(FilterMutation),
    Status(StatusMessage),
}

#[derive(Debug)]
pub enum FilterMutation {
    Set {
        field: FilterField,
        choice: FilterChoice,
    },
    Reset,
}
