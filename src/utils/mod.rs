pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::next_day;
pub(crate) use debug::{debug_enabled, set_debug};
