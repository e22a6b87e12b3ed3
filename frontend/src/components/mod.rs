pub mod loader;
pub mod no_content;
pub mod sidebar;
pub mod site_form;
pub mod site_list;
