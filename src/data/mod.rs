pub(crate) mod dataset;
pub(crate) mod date;
pub(crate) mod demo;
pub(crate) mod series;
