pub mod post_daily_content;
pub mod respond_to_comments;
