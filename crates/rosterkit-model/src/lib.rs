pub mod columns;
pub mod identity;
pub mod maps;
pub mod normalize;
pub mod record;

pub use identity::IdentityMatch;
pub use maps::{
    COMPANION_NAME, FREQ_MAP, SENIORITY_MAP, STUDENT_SENIORITY, STUDENT_TITLE, TITLE_MAP, remap,
};
pub use columns::KIT_HEADERS;
pub use normalize::{equal_nonempty, norm_email, norm_name, norm_str};
pub use record::{COMPANION_HEADERS, CompanionRow, KitRow, RegistrationRow};
