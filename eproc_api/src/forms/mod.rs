mod case_classes;
pub use self::case_classes::{CASE_CLASS_IDS, DEFAULT_CASE_CLASS};

mod common;
pub use self::common::{Form, FORM_URLENCODED, FORM_URLENCODED_UTF8};

mod search;
pub use self::search::{DocumentSearchForm, QuickSearchForm};

mod parties;
pub use self::parties::HiddenPartiesForm;
