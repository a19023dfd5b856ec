pub mod layout;
pub mod settings_panel;
pub mod trends_form;
pub mod trends_preview;
pub mod urgent_form;
