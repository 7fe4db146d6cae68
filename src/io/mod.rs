pub mod excel_read;
pub mod excel_write;
pub mod html_write;
pub mod markdown_write;
