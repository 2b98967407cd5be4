mod sketch_provider;
pub use sketch_provider::*;

mod canvas;
pub use canvas::*;

mod color_picker;
pub use color_picker::*;

mod brush_setting;
pub use brush_setting::*;

mod toolbar;
pub use toolbar::*;
