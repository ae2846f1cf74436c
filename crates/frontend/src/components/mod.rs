pub mod map_view;
pub mod notice_stack;
pub mod route_summary;
pub mod status_panel;
