mod layout;
mod output;
pub mod wasm;

pub use layout::{
    ArchimedeanSpiral, CircularCloudLayouter, LayoutConfig, LayoutError, PointI, RectI, SizeI,
};
pub use output::{CloudOutput, ErrorInfo};
