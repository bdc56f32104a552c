pub mod blog_posts;
pub mod palm_reading;
