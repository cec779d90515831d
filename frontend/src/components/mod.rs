pub mod navigation_header;
