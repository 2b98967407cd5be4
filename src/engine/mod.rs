mod color;
pub use color::*;

mod stroke;
pub use stroke::*;

mod path;
pub use path::*;

mod tool;
pub use tool::*;

mod canvas;
pub use canvas::*;

mod render;
pub use render::*;

mod sketch;
pub use sketch::*;
