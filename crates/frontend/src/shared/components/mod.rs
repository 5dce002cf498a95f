pub mod multi_select_filter;
pub mod pagination_controls;
pub mod stat_card;
