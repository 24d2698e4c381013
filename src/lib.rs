//! Headless chart-animation engine.
//!
//! `chartreel` drives three chart views (an annotated line chart, an animated bubble chart and a
//! transition bubble chart) from a deterministic virtual clock. Views build a backend-neutral
//! [`Scene`] per frame; scenes serialize to SVG and rasterize through `resvg`.
//!
//! The [`App`] shell owns the menu, the mounted view and the clock. Input arrives as
//! [`UiEvent`]s and time moves only through [`App::advance`].

#![forbid(unsafe_code)]

mod animation;
mod charts;
mod config;
mod data;
mod foundation;
mod record;
mod render;
mod scale;
mod scene;
mod shell;
mod timeline;

pub use animation::{
    ease::Ease,
    tween::{Lerp, Tween},
};
pub use charts::{
    bubble::{BubbleChartView, BubbleVariant, Controls, PlayIcon, Slider, placeholder_scene},
    line::{AnnotatedLineChart, LabelPlacement, LineStyle, label_placement},
    tooltip::{Tooltip, hit_test},
};
pub use config::ChartConfig;
pub use data::{
    dataset::{DataPoint, Dataset, DatasetExtent},
    date::{display_date, parse_date_key, short_date},
    demo::{demo_dataset, demo_series},
    series::{LinePoint, LineSeries},
};
pub use foundation::{
    color::Rgba8,
    core::{BezPath, Canvas, Millis, Padding, Point, Rect, Vec2},
    error::{ChartError, ChartResult},
};
pub use record::{
    recorder::{RecordOpts, RecordStats, rasterize_all, record_playback},
    sink::{FrameSink, InMemorySink, PngDirSink, SinkConfig},
};
pub use render::{
    backend::{DrawCtx, StepRenderer, TransitionId},
    full_redraw::FullRedrawRenderer,
    marks::BubbleStyle,
    raster::{FrameRGBA, Rasterizer},
    transition::TransitionRenderer,
};
pub use scale::{
    color::{ColorScale, Palette},
    linear::LinearScale,
    set::{DOMAIN_PADDING, ScaleCache, ScaleSet},
    ticks::ticks,
};
pub use scene::model::{
    Axis, AxisOrient, Dash, LineNode, Mark, Node, PathNode, Scene, TextAnchor, TextNode, Tick,
};
pub use shell::{
    app::{App, ChartView, UiEvent},
    menu::{ChartKind, MenuEntry, MenuState},
};
pub use timeline::{
    clock::{Scheduler, TimerId, VirtualClock},
    controller::{DEFAULT_PLAYBACK_PERIOD, TimelineController, TimelineState},
};
