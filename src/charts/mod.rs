pub(crate) mod bubble;
pub(crate) mod line;
pub(crate) mod tooltip;
