pub(crate) mod axis;
pub(crate) mod backend;
pub(crate) mod full_redraw;
pub(crate) mod marks;
pub(crate) mod raster;
pub(crate) mod transition;
