//! Pagination math: link states and the numbered page window

mod calculator;
mod descriptor;
mod state;

pub use calculator::{
    compute_links, LinkSet, PageWindowCalculator, DEFAULT_MAX_NUMBERS,
};
pub use descriptor::{LinkDescriptor, LinkKind, PageWindow};
pub use state::PaginationState;
