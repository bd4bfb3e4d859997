pub mod disambiguation;
pub mod error;
pub mod extractor;
pub mod io;
pub mod keys;
pub mod mode;
pub mod schema;

pub use disambiguation::{FamilyNameMatcher, Quarterback, QuarterbackMatcher};
pub use error::{ExtractError, ExtractWarning};
pub use extractor::{Extraction, PlayTables, PressurePlayExtractor};
pub use io::write_csv;
pub use mode::PressureMode;
