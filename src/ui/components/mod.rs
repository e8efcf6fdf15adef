pub mod confirmation_banner;
pub mod navbar;
pub mod preset_list;
pub mod saved_suppliers;
pub mod scout_page;
pub mod search_form;
pub mod search_status;
pub mod supplier_card;
pub mod supplier_row;

pub use confirmation_banner::ConfirmationBanner;
pub use navbar::Navbar;
pub use preset_list::PresetList;
pub use saved_suppliers::SavedSuppliers;
pub use scout_page::Search;
pub use search_form::SearchForm;
pub use search_status::SearchStatus;
pub use supplier_card::SupplierCard;
pub use supplier_row::SupplierRow;
