pub mod algorithm_info;
pub mod detail_body;
pub mod preview_card;
