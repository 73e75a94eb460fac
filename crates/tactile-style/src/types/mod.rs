//! Style value types.

mod value;

pub use value::{
    Alignment, BorderStyle, EdgeValues, FlexDirection, FontWeight, Justify, StyleValue, TextAlign,
    TextOverflow,
};
