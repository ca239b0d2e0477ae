// File: crates/tufte-core/src/lib.rs
// Summary: Core library entry point; exports tick, stem-and-leaf, summary and decoration APIs.

pub mod error;
pub mod ticks;
pub mod stem_leaf;
pub mod summary;
pub mod time;
pub mod types;
pub mod scale;
pub mod draw;
pub mod frame;

pub use error::{Result, TufteError};
pub use ticks::{data_min_max, format_tick, generate_ticks, generate_ticks_with, TickOptions};
pub use stem_leaf::{stem_and_leaf, stem_and_leaf_with, Number, NumericSeries, StemLeafFormat, StemLeafOptions, StemTable};
pub use summary::{histogram, pareto, quartile_groups, Histogram, ParetoEntry, QuartileSummary, SparkMarkers};
pub use time::{format_time_tick, time_ticks};
pub use types::{Insets, Point, Rgba};
pub use scale::LinearScale;
pub use draw::{Anchor, DrawCmd, RecordingSurface, Spine, Stroke, Surface};
pub use frame::{apply_tufte_style, decorate_xy, knockout_lines, AxisSide, FrameOptions, RangeFrame};
