pub(crate) mod color;
pub(crate) mod linear;
pub(crate) mod set;
pub(crate) mod ticks;
