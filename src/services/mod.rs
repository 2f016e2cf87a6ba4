// Services layer - Validation and response construction
pub mod item_service;
pub mod item_validator;
pub mod listing_service;
pub mod query_validator;

pub use item_service::ItemService;
pub use item_validator::ItemValidator;
pub use listing_service::ListingService;
pub use query_validator::LengthBounds;
