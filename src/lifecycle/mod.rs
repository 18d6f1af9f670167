//! Pure collaboration lifecycle logic. Nothing in here touches the store.

pub mod auto_response;
pub mod calendar;
pub mod labels;
pub mod progress;
pub mod tasks;
pub mod templates;
pub mod transitions;

pub use progress::{current_step, current_step_from_raw};
pub use tasks::filter_and_sort;
