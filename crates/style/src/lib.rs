pub mod dimension;
pub mod flex;
pub mod parsers;
pub mod position;
pub mod record;
pub mod sides;
pub mod style;

pub use dimension::{Dimension, deserialize_aspect_ratio};
pub use flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
pub use parsers::StyleParseError;
pub use position::{Overflow, PositionType};
pub use record::{StyleNode, StyleRecord};
pub use sides::{BoxSides, SidesInput};
pub use style::FlexStyle;
