pub mod convert;
pub mod palette;

pub use convert::{
    handle_convert, ConvertQuery, ConvertResponse, HistogramEntry, OutputFormat,
    __path_handle_convert,
};
pub use palette::{
    handle_classify, handle_palette, ClassifyQuery, ClassifyResponse, PaletteColor,
    __path_handle_classify, __path_handle_palette,
};
