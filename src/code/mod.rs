//! Grid code codec.
//!
//! Implements the open geographic code scheme: a location is written as
//! digits from a 20-symbol alphabet, where each (latitude, longitude) digit
//! pair narrows the cell by a factor of 400 and digits beyond the tenth
//! subdivide on a 4x5 grid. Codes carry a `+` separator after the eighth
//! digit, pad unused leading positions with `0`, and may omit their leading
//! digits entirely when a nearby reference location can restore them.
//!
//! All operations are pure functions over strings and degrees; nothing here
//! performs I/O or holds state.
//!
//! # Example
//!
//! ```
//! use gridcode::code::{decode, encode, recover_nearest};
//!
//! let code = encode(33.3152, 44.3661, 10)?;
//! assert_eq!(code, "8H568988+3C");
//!
//! let area = decode(&code)?;
//! assert!(area.contains(33.3152, 44.3661));
//!
//! let full = recover_nearest("8988+3C", 33.3152, 44.3661)?;
//! assert_eq!(full, code);
//! # Ok::<(), gridcode::code::CodeError>(())
//! ```

mod alphabet;
mod area;
mod decode;
mod encode;
mod error;
mod recover;
mod validate;

pub use alphabet::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS,
    MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
pub use area::CodeArea;
pub use decode::decode;
pub use encode::encode;
pub use error::CodeError;
pub use recover::{recover_nearest, shorten};
pub use validate::{is_full, is_short, is_valid};
