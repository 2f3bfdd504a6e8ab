//! Configuration model handed to the conversion engine.
//!
//! Everything here is plain data: the binder fills it in and the caller
//! owns it afterwards. All types serialize with `serde` so the whole tree can
//! be passed to an out-of-process engine.

mod format;
mod options;
mod theme;

pub use format::{CodeHighlightTheme, Leader, ListStyle, PaperFormat};
pub use options::{ConverterOptions, PageNumberOptions, ResolvedConfiguration, TableOfContents};
pub use theme::{PredefinedTheme, Theme};
