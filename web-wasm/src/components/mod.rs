pub mod header;
pub mod upload_area;
pub mod action_buttons;
pub mod status_bar;
pub mod tab_strip;
pub mod breach_tables;
pub mod scenario_summary;
pub mod chart_gallery;
