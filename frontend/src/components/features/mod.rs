pub mod b2b_audit;
pub mod create_family_modal;
pub mod dashboard;
pub mod family_sharing;
pub mod marketplace;
pub mod profile_settings;
pub mod promo_code_dialog;
pub mod subscription_settings_sheet;

pub use b2b_audit::B2bAudit;
pub use dashboard::Dashboard;
pub use family_sharing::FamilySharing;
pub use marketplace::Marketplace;
pub use profile_settings::ProfileSettings;
