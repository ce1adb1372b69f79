mod party;
pub use self::party::{Party, PersonType};

mod lawsuit;
pub use self::lawsuit::{LawsuitEvent, LawsuitNumber, LawsuitRecord};

mod search;
pub use self::search::{DocumentSearchResponse, DocumentSearchResult};
