pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::{PixelGrid, BLACK, WHITE};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
