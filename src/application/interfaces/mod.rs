mod call_site_source;

pub use call_site_source::*;
