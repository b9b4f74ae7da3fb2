pub mod date_input;
pub mod month_input;
pub mod page_header;
pub mod paged_list;
pub mod pagination_controls;
pub mod reference_select;
pub mod search_input;
