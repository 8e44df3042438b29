//! Wire and domain models for the admin service.
//!
//! These mirror the platform API's JSON shapes (Mongo-style `_id`,
//! camelCase fields) and carry the small amount of data shaping the
//! dashboard needs: tag normalization and category/author fallbacks.

pub mod admin_account;
pub mod author;
pub mod blog;
pub mod category;
pub mod member;
pub mod palliative;
pub mod resource;
pub mod session;
pub mod tags;
pub mod thread;

pub use admin_account::AdminAccount;
pub use author::{AuthorRef, AuthorSummary};
pub use blog::Blog;
pub use category::{Category, CategoryRef, ResourceCategory};
pub use member::Member;
pub use palliative::{PalliativeService, PalliativeUnit};
pub use resource::Resource;
pub use session::{CurrentAdmin, session_keys};
pub use thread::Thread;
