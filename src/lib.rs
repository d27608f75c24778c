pub mod context;
pub mod convert;
pub mod parsi;
pub mod process;
pub mod profile;
pub mod stage;
pub mod table;
pub mod unicode;

pub use context::{Context, UrlDecoding};
pub use convert::{
    convert_en_characters, convert_en_numbers, convert_fa_characters, convert_fa_numbers,
    convert_fa_spaces, decode_url, decode_url_lossy, encode_url,
};
pub use parsi::{Parsi, ParsiBuilder, ParsiError};
pub use profile::{Profile, ProfileError};
pub use stage::convert_numbers::{ConvertNumbers, EN_TO_FA_NUMBERS, FA_TO_EN_NUMBERS};
pub use stage::decode_url::DecodeUrl;
pub use stage::half_space::HalfSpace;
pub use stage::substitute::Substitute;
pub use stage::transliterate::{EN_TO_FA_CHARACTERS, FA_TO_EN_CHARACTERS, Transliterate};
pub use stage::{Stage, StageError};
pub use table::{Direction, MappingTable};
